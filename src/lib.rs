//! csv2sql library: converts delimited text records into batched SQL INSERT statements
//!
//! The first record of the input names the columns; every following record
//! becomes one value-tuple. Tuples are grouped into `INSERT INTO` statements of
//! at most `rows_per_statement` rows each, one statement per line.
//!
//! # Example
//!
//! ```no_run
//! use csv2sql::{run_conversion, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: PathBuf::from("people.csv"),
//!     delimiter: ',',
//!     rows_per_statement: 500,
//!     ..Default::default()
//! };
//!
//! let report = run_conversion(config)?;
//! println!("Wrote {} statements for {} rows",
//!          report.statements, report.data_rows);
//! # Ok(())
//! # }
//! ```
//!
//! Lower-level pieces are public as well: [`sql::ValueFormatter`] for the
//! escaping rules and [`emitter::BatchEmitter`] for the batching state machine.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod emitter;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod sql;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use emitter::{BatchEmitter, EmitOptions, EmitSummary};
pub use run::{convert, run_conversion, ConversionReport};
pub use sql::{SqlDialect, ValueFormatter};

// Internal run module (contains the top-level conversion logic)
mod run {
    use std::fs::File;
    use std::io::{BufWriter, Read, Write};
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use csv::{Reader, StringRecord};
    use log::info;

    use crate::app::{log_progress, rows_per_second};
    use crate::config::Config;
    use crate::emitter::{BatchEmitter, EmitOptions, EmitSummary};
    use crate::input::{open_input, records_from_reader};
    use crate::sql::ValueFormatter;

    /// Results of a conversion run.
    #[derive(Debug, Clone)]
    pub struct ConversionReport {
        /// Data rows converted (header excluded)
        pub data_rows: usize,
        /// INSERT statements written
        pub statements: usize,
        /// Number of header columns
        pub columns: usize,
        /// Data rows whose field count differed from the header
        pub ragged_rows: usize,
        /// Target table name
        pub table: String,
        /// Path of the generated SQL file
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Converts delimited records from `input` into INSERT statements on `output`.
    ///
    /// Rows are streamed one at a time; only the statement being built is held
    /// in memory.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable record, unescapable value, rejected row or
    /// write error. Output already written is left as is.
    pub fn convert<R, W, F>(
        input: R,
        output: W,
        delimiter: u8,
        formatter: F,
        options: EmitOptions,
    ) -> Result<EmitSummary>
    where
        R: Read,
        W: Write,
        F: ValueFormatter,
    {
        let mut reader = records_from_reader(input, delimiter);
        convert_records(&mut reader, output, formatter, options)
    }

    fn convert_records<R, W, F>(
        reader: &mut Reader<R>,
        output: W,
        formatter: F,
        options: EmitOptions,
    ) -> Result<EmitSummary>
    where
        R: Read,
        W: Write,
        F: ValueFormatter,
    {
        let mut emitter =
            BatchEmitter::new(output, formatter, options).context("Invalid emitter options")?;
        let start_time = Instant::now();

        let mut record = StringRecord::new();
        while reader
            .read_record(&mut record)
            .context("Failed to read input record")?
        {
            let line = record.position().map_or(0, |p| p.line());
            emitter
                .push_record(record.iter())
                .with_context(|| format!("Failed to convert record on line {}", line))?;
            log_progress(start_time, emitter.summary().data_rows);
        }

        emitter.finish().context("Failed to write final statement")
    }

    /// Runs a conversion with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the
    /// configuration, reads the input file and writes the generated SQL to the
    /// resolved output path.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid (nothing is opened or created)
    /// - The input file cannot be opened or contains a malformed record
    /// - The output file cannot be created or written
    /// - A value cannot be escaped, or a ragged row is found in strict mode
    pub fn run_conversion(config: Config) -> Result<ConversionReport> {
        config.validate().context("Invalid configuration")?;

        let output_path = config.output_path();
        let table = config.table_name();
        let delimiter =
            u8::try_from(config.delimiter).context("Delimiter must be a single-byte character")?;

        let mut reader = open_input(&config.input, delimiter).with_context(|| {
            format!("Failed to open input file: {}", config.input.display())
        })?;
        let output = File::create(&output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;

        info!(
            "Converting {} into table {} ({} dialect, {} rows per statement{}{})",
            config.input.display(),
            table,
            config.dialect.name(),
            config.rows_per_statement,
            if config.ignore { ", IGNORE" } else { "" },
            if config.escape { "" } else { ", escaping disabled" }
        );

        let options = EmitOptions {
            table: table.clone(),
            rows_per_statement: config.rows_per_statement,
            ignore: config.ignore,
            escape: config.escape,
            strict: config.strict,
        };

        let start_time = Instant::now();
        let summary = convert_records(
            &mut reader,
            BufWriter::new(output),
            config.dialect,
            options,
        )
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        info!(
            "Converted {} rows into {} statements in {:.2} seconds (~{:.0} rows/sec)",
            summary.data_rows,
            summary.statements,
            elapsed_seconds,
            rows_per_second(summary.data_rows, elapsed_seconds)
        );
        if summary.ragged_rows > 0 {
            log::warn!(
                "{} rows had a different field count than the header",
                summary.ragged_rows
            );
        }

        Ok(ConversionReport {
            data_rows: summary.data_rows,
            statements: summary.statements,
            columns: summary.columns,
            ragged_rows: summary.ragged_rows,
            table,
            output_path,
            elapsed_seconds,
        })
    }

}
