//! Progress logging utilities.

use std::time::Instant;

use log::info;

use crate::config::PROGRESS_LOG_INTERVAL;

/// Rows per second over `elapsed_secs`, or 0 when no time has passed.
pub fn rows_per_second(rows: usize, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        rows as f64 / elapsed_secs
    } else {
        0.0
    }
}

/// Logs a progress line every `PROGRESS_LOG_INTERVAL` data rows.
///
/// # Arguments
///
/// * `start_time` - When the conversion started
/// * `data_rows` - Data rows converted so far
pub fn log_progress(start_time: Instant, data_rows: usize) {
    if data_rows == 0 || data_rows % PROGRESS_LOG_INTERVAL != 0 {
        return;
    }
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    info!(
        "Converted {} rows in {:.2} seconds (~{:.0} rows/sec)",
        data_rows,
        elapsed_secs,
        rows_per_second(data_rows, elapsed_secs)
    );
}
