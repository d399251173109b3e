//! Application initialization.
//!
//! The converter needs very little setup: only the logger is process-global.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
