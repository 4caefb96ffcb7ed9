//! CSV emission for the consolidated heart rate report
//!
//! Rendering and file handling are split: [`records_to_csv`] produces text,
//! [`init_output_file`] and [`append_csv`] put it on disk. The batch runner
//! writes the header once and appends each file's records after it.

use crate::error::{GpxError, Result};
use crate::types::HrRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Report column order, matching the header line written at batch start
pub const CSV_HEADER: [&str; 4] = ["Name", "Date", "Time", "Heart Rate"];

/// Render records as CSV text, optionally preceded by the header row.
///
/// Field values containing commas, quotes, or newlines are quoted with
/// internal quotes doubled. An empty record slice without a header renders
/// as the empty string. Output order equals input order.
pub fn records_to_csv(records: &[HrRecord], include_header: bool) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if include_header {
        writer.write_record(&CSV_HEADER)?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GpxError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| GpxError::Export(e.to_string()))
}

/// Create or truncate the report file and write the fixed header line.
pub fn init_output_file(output_path: &Path) -> Result<()> {
    let header = records_to_csv(&[], true)?;
    std::fs::write(output_path, header)?;
    Ok(())
}

/// Append rendered CSV text to the report file.
///
/// Empty text leaves the file untouched.
pub fn append_csv(output_path: &Path, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
