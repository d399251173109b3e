//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `csv2sql` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use csv2sql::initialization::init_logger_with;
use csv2sql::{run_conversion, Config, Opt};

fn main() -> Result<()> {
    // Usage errors exit with status 2 from inside clap
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_conversion(config) {
        Ok(report) => {
            println!(
                "Converted {} row{} into {} statement{} for table {} in {:.1}s",
                report.data_rows,
                if report.data_rows == 1 { "" } else { "s" },
                report.statements,
                if report.statements == 1 { "" } else { "s" },
                report.table,
                report.elapsed_seconds
            );
            println!("SQL saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("csv2sql error: {:#}", e);
            process::exit(1);
        }
    }
}
