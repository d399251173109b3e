//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DELIMITER, DEFAULT_ROWS_PER_STATEMENT, OUTPUT_EXTENSION, RESERVED_DELIMITERS,
};
use crate::error_handling::ConfigValidationError;
use crate::sql::SqlDialect;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// Convert it into a [`Config`] with `Config::from`.
///
/// # Examples
///
/// ```bash
/// # Basic usage: people.csv -> people.csv.sql, table `people`
/// csv2sql -i people.csv
///
/// # Comma-separated input, 500 rows per statement, INSERT IGNORE
/// csv2sql -i people.csv -d , --per-line 500 --ignore
/// ```
#[derive(Debug, Parser)]
#[command(name = "csv2sql", about = "Converts CSV to SQL INSERT statements.")]
pub struct Opt {
    /// Input file (first record holds the column names)
    #[arg(short = 'i', long = "input", value_parser)]
    pub input: PathBuf,

    /// Output file. Defaults to the input path with `.sql` appended
    #[arg(short = 'o', long = "output", value_parser)]
    pub output: Option<PathBuf>,

    /// Table name. Defaults to the input file name up to its first dot
    #[arg(short = 't', long = "table")]
    pub table: Option<String>,

    /// Field delimiter
    #[arg(short = 'd', long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Number of data rows per INSERT statement
    #[arg(
        short = 'p',
        long = "per-line",
        visible_alias = "rows-per-statement",
        default_value_t = DEFAULT_ROWS_PER_STATEMENT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub per_line: usize,

    /// Generate INSERT IGNORE statements
    #[arg(short = 'g', long)]
    pub ignore: bool,

    /// Do NOT escape values. Use with caution
    #[arg(short = 'n', long)]
    pub no_escape: bool,

    /// Database dialect used for formatting and escaping
    #[arg(long, value_enum, ignore_case = true, default_value_t = SqlDialect::MySql)]
    pub dialect: SqlDialect,

    /// Reject data rows whose field count differs from the header
    #[arg(long)]
    pub strict: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use csv2sql::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("people.csv"),
///     delimiter: ',',
///     rows_per_statement: 500,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read records from
    pub input: PathBuf,

    /// Output file; `None` means `<input>.sql`
    pub output: Option<PathBuf>,

    /// Target table; `None` means the input base name
    pub table: Option<String>,

    /// Field delimiter
    pub delimiter: char,

    /// Maximum data rows per statement
    pub rows_per_statement: usize,

    /// Emit `INSERT IGNORE INTO`
    pub ignore: bool,

    /// Escape values before quoting them
    pub escape: bool,

    /// Formatting and escaping dialect
    pub dialect: SqlDialect,

    /// Fail on ragged rows instead of warning
    pub strict: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            table: None,
            delimiter: DEFAULT_DELIMITER,
            rows_per_statement: DEFAULT_ROWS_PER_STATEMENT,
            ignore: false,
            escape: true,
            dialect: SqlDialect::MySql,
            strict: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output: opt.output,
            table: opt.table,
            delimiter: opt.delimiter,
            rows_per_statement: opt.per_line,
            ignore: opt.ignore,
            escape: !opt.no_escape,
            dialect: opt.dialect,
            strict: opt.strict,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

impl Config {
    /// Resolves the output path, appending `.sql` to the input path when unset.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let mut name = self.input.clone().into_os_string();
                name.push(".");
                name.push(OUTPUT_EXTENSION);
                PathBuf::from(name)
            }
        }
    }

    /// Resolves the table name, falling back to the input file name up to its
    /// first dot (`data/people.2024.csv` gives `people`).
    pub fn table_name(&self) -> String {
        match &self.table {
            Some(table) => table.clone(),
            None => table_name_from_path(&self.input),
        }
    }

    /// Checks every option before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "input",
                "an input file is required (use --input <PATH>)",
            ));
        }

        if self.rows_per_statement == 0 {
            return Err(ConfigValidationError::new(
                "rows_per_statement",
                "rows per statement must be greater than 0",
            ));
        }

        if !self.delimiter.is_ascii() || RESERVED_DELIMITERS.contains(&self.delimiter) {
            return Err(ConfigValidationError::new(
                "delimiter",
                format!(
                    "delimiter must be a single ASCII character other than a quote or line break, got {:?}",
                    self.delimiter
                ),
            ));
        }

        if self.table_name().trim().is_empty() {
            return Err(ConfigValidationError::new(
                "table",
                "table name is empty; pass one explicitly with --table <NAME>",
            ));
        }

        if same_file(&self.input, &self.output_path()) {
            return Err(ConfigValidationError::new(
                "output",
                format!(
                    "output path must differ from the input path ({})",
                    self.input.display()
                ),
            ));
        }

        Ok(())
    }
}

/// True when both paths name the same file. Paths that cannot be
/// canonicalized (e.g. an output that does not exist yet) are compared as
/// written.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn table_name_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .unwrap_or_default()
}
