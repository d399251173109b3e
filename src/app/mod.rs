//! Main application helpers.

pub mod logging;

// Re-export public API
pub use logging::{log_progress, rows_per_second};
