//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// An invalid configuration option.
///
/// `field` names the offending `Config` field so callers can point the user at
/// the matching CLI flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the invalid field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Error types for value formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The dialect cannot represent this value as a string literal.
    #[error("{dialect} cannot escape value {value:?}: {reason}")]
    Unescapable {
        /// Dialect name
        dialect: String,
        /// The raw value
        value: String,
        /// Why escaping failed
        reason: String,
    },
}

/// Error types for statement emission.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// A value in a data row could not be escaped.
    #[error("Failed to format data row {row}: {source}")]
    Format {
        /// 1-based data row number (the header is not counted)
        row: usize,
        /// Underlying formatting error
        #[source]
        source: FormatError,
    },

    /// A data row has a different number of fields than the header (strict mode).
    #[error("Data row {row} has {found} fields but the header has {expected}")]
    FieldCountMismatch {
        /// 1-based data row number (the header is not counted)
        row: usize,
        /// Number of header columns
        expected: usize,
        /// Number of fields in the row
        found: usize,
    },

    /// The emitter was configured with a batch size of zero.
    #[error("Rows per statement must be greater than 0")]
    ZeroRowsPerStatement,

    /// A record was pushed after the emitter finished.
    #[error("Cannot accept records after the emitter has finished")]
    Finished,
}
