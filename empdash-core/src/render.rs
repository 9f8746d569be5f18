//! Line rendering onto output surfaces.
//!
//! The output of a dashboard run is always the header line followed by one
//! line per record, in the order the query returned them.

use std::io::Write;

use crate::error::Result;
use crate::record::Record;

/// First line of every rendering.
pub const HEADER: &str = "Employee Data:";

/// A sink that displays lines of text to a user.
pub trait Surface {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Header plus one line per record.
pub fn render_lines(records: &[Record]) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(records.iter().map(Record::to_string));
    lines
}

/// Write the header and every record to `surface`, in order.
pub fn present<S: Surface + ?Sized>(records: &[Record], surface: &mut S) -> Result<()> {
    surface.write_line(HEADER)?;
    for record in records {
        surface.write_line(&record.to_string())?;
    }
    Ok(())
}

/// Newline-terminated lines to any writer (stdout for the terminal surface).
pub struct WriterSurface<W: Write> {
    writer: W,
}

impl<W: Write> WriterSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for WriterSurface<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

impl Surface for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CellValue;

    fn employees() -> Vec<Record> {
        vec![
            Record::new(vec![CellValue::Integer(1), CellValue::Text("Alice".into())]),
            Record::new(vec![CellValue::Integer(2), CellValue::Text("Bob".into())]),
        ]
    }

    #[test]
    fn renders_header_then_rows() {
        assert_eq!(
            render_lines(&employees()),
            vec!["Employee Data:", "(1, 'Alice')", "(2, 'Bob')"]
        );
    }

    #[test]
    fn empty_table_renders_header_only() {
        assert_eq!(render_lines(&[]), vec![HEADER]);
    }

    #[test]
    fn writer_surface_emits_newline_terminated_lines() {
        let mut surface = WriterSurface::new(Vec::new());
        present(&employees(), &mut surface).unwrap();

        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "Employee Data:\n(1, 'Alice')\n(2, 'Bob')\n");
    }

    #[test]
    fn present_matches_render_lines() {
        let mut collected: Vec<String> = Vec::new();
        present(&employees(), &mut collected).unwrap();
        assert_eq!(collected, render_lines(&employees()));
    }
}
