//! CSV report output.
//!
//! The header is fixed ([`OutputRow::COLUMNS`]) and always written, even for an
//! empty report. Files are written to a temp sibling and renamed into place so a
//! failed run never leaves a half-written report behind.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::join::OutputRow;

/// Writes the header and `rows` as CSV to `writer`.
pub fn write_rows<W: Write>(writer: W, rows: &[OutputRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(OutputRow::COLUMNS)
        .context("write CSV header")?;
    for row in rows {
        wtr.serialize(row)
            .with_context(|| format!("write CSV row for nid {}", row.nid))?;
    }
    wtr.flush().context("flush CSV output")?;
    Ok(())
}

/// Renders the report to a string (used for previews and tests).
pub fn render_rows(rows: &[OutputRow]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, rows)?;
    String::from_utf8(buf).context("CSV output is not UTF-8")
}

/// Writes the report to `path`, replacing any existing file atomically.
pub fn write_report(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    write_rows(tmp.as_file_mut(), rows)?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync report for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("write report {}", path.display()))?;
    tracing::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
