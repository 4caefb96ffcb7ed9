//! Sequential batch conversion
//!
//! Discovers the `.gpx` files of the input directory, initializes the report
//! file with its header line, then drives the per-file pipeline one file at
//! a time. No file is opened before the previous file's records are fully
//! appended, which keeps the report deterministic with a single writer and
//! no locking. The first error anywhere aborts the run and leaves the report
//! partially written.

use crate::export::{append_csv, init_output_file, records_to_csv};
use crate::extract::extract_records;
use crate::parser::parse_gpx_str;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Batch configuration, passed by value into [`run_batch`]
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory whose `.gpx` entries are converted
    pub input_dir: PathBuf,
    /// Destination of the consolidated CSV report
    pub output_path: PathBuf,
    /// Enable detailed progress output
    pub debug: bool,
}

/// Outcome of a completed batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub files_processed: usize,
    pub records_written: usize,
}

/// List the input directory and keep entries with a `.gpx` extension
/// (case-insensitive), preserving the directory's native listing order.
pub fn discover_gpx_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("Failed to list input directory: {:?}", input_dir))?;

    let mut gpx_paths = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {:?}", input_dir))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_gpx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase() == "gpx")
            .unwrap_or(false);
        if is_gpx {
            gpx_paths.push(path);
        }
    }

    Ok(gpx_paths)
}

/// Convert one GPX file and append its records to the report file.
///
/// Stages run in order: read as UTF-8, parse XML, extract records, render
/// CSV without a header, append. Returns the number of records appended.
/// Nothing is recovered locally; any stage failure propagates so one bad
/// input aborts the caller's batch.
pub fn process_gpx_file(input_path: &Path, output_path: &Path, debug: bool) -> Result<usize> {
    let text = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read GPX file: {:?}", input_path))?;

    let document = parse_gpx_str(&text)
        .with_context(|| format!("Failed to parse GPX file: {:?}", input_path))?;
    if debug {
        println!("Parsed {} track points", document.point_count());
    }

    let records = extract_records(&document)
        .with_context(|| format!("Failed to extract heart rate records from {:?}", input_path))?;
    if debug {
        println!("Extracted {} heart rate records", records.len());
    }

    let csv_text = records_to_csv(&records, false)
        .with_context(|| format!("Failed to render CSV for {:?}", input_path))?;
    append_csv(output_path, &csv_text)
        .with_context(|| format!("Failed to append results to {:?}", output_path))?;

    Ok(records.len())
}

/// Run the full conversion: discovery, report initialization, then one file
/// at a time in listing order.
///
/// An empty input directory is valid and produces a header-only report.
pub fn run_batch(options: &BatchOptions) -> Result<BatchReport> {
    let gpx_paths = discover_gpx_files(&options.input_dir)?;
    println!("Found {} .gpx files", gpx_paths.len());
    println!("Start parsing...");

    init_output_file(&options.output_path)
        .with_context(|| format!("Failed to initialize output file: {:?}", options.output_path))?;

    let mut records_written = 0;
    for path in &gpx_paths {
        println!("Parsing file: {}", path.display());
        records_written += process_gpx_file(path, &options.output_path, options.debug)?;
    }

    Ok(BatchReport {
        files_processed: gpx_paths.len(),
        records_written,
    })
}
