//! Configuration constants.
//!
//! Defaults for CLI options and fixed pieces of the generated SQL.

/// Default field delimiter (semicolon)
pub const DEFAULT_DELIMITER: char = ';';

/// Default number of data rows rendered into a single INSERT statement
pub const DEFAULT_ROWS_PER_STATEMENT: usize = 100;

/// Extension appended to the input path when no output path is given
pub const OUTPUT_EXTENSION: &str = "sql";

/// Written after every statement
pub const STATEMENT_TERMINATOR: &str = ";\n";

/// Separator between value-tuples inside one statement
pub const TUPLE_SEPARATOR: &str = ", ";

/// Log a progress line every this many data rows
pub const PROGRESS_LOG_INTERVAL: usize = 100_000;

/// Characters that cannot act as a field delimiter.
///
/// The quote character is reserved by the CSV reader and line breaks terminate
/// records.
pub const RESERVED_DELIMITERS: &[char] = &['"', '\r', '\n'];
