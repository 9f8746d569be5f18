//! Terminal surface: print the employee lines to stdout.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use empdash_core::{present, DashConfig, WriterSurface};
use empdash_server::fetch_employees;

/// Fetch every employee row, then print header and rows.
///
/// Nothing reaches stdout unless the fetch succeeded.
pub async fn run_show(config: &DashConfig) -> Result<()> {
    let db = &config.database;
    let records = fetch_employees(db).await.with_context(|| {
        format!(
            "Failed to load employees from {}:{}/{}",
            db.host, db.port, db.dbname
        )
    })?;
    tracing::debug!(rows = records.len(), "Printing employee data");

    let mut surface = WriterSurface::new(BufWriter::new(io::stdout().lock()));
    present(&records, &mut surface).context("Failed to write to stdout")?;
    surface
        .into_inner()
        .flush()
        .context("Failed to flush stdout")?;

    Ok(())
}
