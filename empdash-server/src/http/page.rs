//! The dashboard page: a plain HTML document with one paragraph per line.

use empdash_core::Surface;

const TITLE: &str = "Employee Dashboard";

/// HTML rendering surface. Every line becomes a `<p class="line">`.
#[derive(Debug, Default)]
pub struct HtmlPage {
    body: String,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the collected lines in a complete document.
    pub fn finish(self) -> String {
        document(&self.body)
    }
}

impl Surface for HtmlPage {
    fn write_line(&mut self, line: &str) -> empdash_core::Result<()> {
        self.body.push_str("<p class=\"line\">");
        self.body.push_str(&escape(line));
        self.body.push_str("</p>\n");
        Ok(())
    }
}

/// Page shown when the data could not be fetched.
pub fn error_page(message: &str) -> String {
    document(&format!("<p class=\"error\">{}</p>\n", escape(message)))
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n\
         <style>body {{ font-family: sans-serif; margin: 2rem; }} \
         p.line {{ font-family: monospace; margin: 0.25rem 0; }} \
         p.error {{ color: #b00020; }}</style>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML text escaping.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
