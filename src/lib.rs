//! GPX Heart Rate Report
//!
//! A Rust library for converting GPX activity files into one consolidated
//! heart rate CSV report. Each heart-rate-instrumented track point becomes a
//! CSV row carrying the activity name, the sample's date and clock time, and
//! the heart-rate value exactly as recorded.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//!
//! # Quick Start
//!
//! Convert a folder of GPX files into a report:
//! ```rust,no_run
//! use gpx_hr_report::{run_batch, BatchOptions};
//! use std::path::PathBuf;
//!
//! let options = BatchOptions {
//!     input_dir: PathBuf::from("./gpx"),
//!     output_path: PathBuf::from("./results.csv"),
//!     debug: false,
//! };
//! let report = run_batch(&options).unwrap();
//! println!("Wrote {} records from {} files", report.records_written, report.files_processed);
//! ```
//!
//! Work with a single file in memory:
//! ```rust,no_run
//! use gpx_hr_report::{extract_records, parse_gpx_file};
//! use std::path::Path;
//!
//! let document = parse_gpx_file(Path::new("morning_run.gpx"), false).unwrap();
//! let records = extract_records(&document).unwrap();
//! println!("Extracted {} heart rate samples", records.len());
//! ```
//!
//! # Public API
//!
//! ## Parsing
//! - [`parse_gpx_file`] - Parse a GPX file from disk
//! - [`parse_gpx_str`] - Parse GPX text from memory
//!
//! ## Extraction
//! - [`extract_records`] - Flatten a document into ordered [`HrRecord`]s
//!
//! ## Export
//! - [`records_to_csv`] - Render records as CSV text
//! - [`init_output_file`] - Create the report file with its header line
//! - [`append_csv`] - Append rendered CSV text to the report file
//!
//! ## Batch
//! - [`discover_gpx_files`] - List a directory's `.gpx` files
//! - [`process_gpx_file`] - Convert one file and append its records
//! - [`run_batch`] - Drive the whole conversion sequentially
//!
//! ## Data Types
//! - [`GpxDocument`] - Parsed activity document tree
//! - [`HrRecord`] - One flattened heart-rate sample
//! - [`BatchOptions`] / [`BatchReport`] - Batch configuration and outcome
//! - [`GpxError`] - Typed error for parse/extract/export failures

// Module declarations
pub mod batch;
pub mod error;
pub mod export;
pub mod extract;
pub mod parser;
pub mod types;

pub use batch::{discover_gpx_files, process_gpx_file, run_batch, BatchOptions, BatchReport};
pub use error::GpxError;
pub use export::{append_csv, init_output_file, records_to_csv, CSV_HEADER};
pub use extract::extract_records;
pub use parser::{parse_gpx_file, parse_gpx_str};
pub use types::{GpxDocument, HeartRateExtension, HrRecord, Track, TrackPoint, TrackSegment};

// Re-export Result type for convenience
pub use anyhow::Result;
