//! CLI binary for the GPX heart rate report converter.

use anyhow::Result;
use clap::{Arg, Command};
use gpx_hr_report::{run_batch, BatchOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = Command::new("GPX Heart Rate Report")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read GPX activity files from a folder and write one consolidated heart rate CSV report.")
        .arg(
            Arg::new("input-dir")
                .short('i')
                .long("input-dir")
                .help("Input folder path; every .gpx file in it (case-insensitive) is parsed")
                .value_name("DIR")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path for the CSV report")
                .value_name("FILE")
                .default_value("./results.csv"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input_dir = PathBuf::from(matches.get_one::<String>("input-dir").unwrap());
    let output_path = PathBuf::from(matches.get_one::<String>("output").unwrap());
    let debug = matches.get_flag("debug");

    // Validate before any writing happens.
    if !input_dir.exists() {
        eprintln!("Input path '{}' does not exist!", input_dir.display());
        std::process::exit(1);
    }
    if !input_dir.is_dir() {
        eprintln!("Input path '{}' is not a directory!", input_dir.display());
        std::process::exit(1);
    }

    let options = BatchOptions {
        input_dir,
        output_path: output_path.clone(),
        debug,
    };

    match run_batch(&options) {
        Ok(report) => {
            if debug {
                println!(
                    "Appended {} heart rate records from {} files",
                    report.records_written, report.files_processed
                );
            }
            println!("Finished writing results to {}", output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}
