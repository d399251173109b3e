//! Error types.
//!
//! This module provides the typed errors raised by the library:
//! - **Initialization**: logger setup failures
//! - **Configuration**: invalid options, reported before any I/O
//! - **Formatting**: a value could not be escaped for the target dialect
//! - **Emitting**: write failures and rejected rows while producing statements
//!
//! The top-level run wraps these in `anyhow` with context describing the
//! failing step.

mod types;

// Re-export public API
pub use types::{ConfigValidationError, EmitError, FormatError, InitializationError};
