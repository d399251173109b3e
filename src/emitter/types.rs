//! Emitter options, state and summary types.

/// How statements are rendered.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Target table name, written verbatim
    pub table: String,
    /// Maximum data rows per statement; 0 is rejected by `BatchEmitter::new`
    pub rows_per_statement: usize,
    /// Render `INSERT IGNORE INTO`
    pub ignore: bool,
    /// Escape values through the formatter; when off, values pass through raw
    pub escape: bool,
    /// Reject rows whose field count differs from the header
    pub strict: bool,
}

impl EmitOptions {
    /// Options for `table` with every other setting at its default.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            rows_per_statement: crate::config::DEFAULT_ROWS_PER_STATEMENT,
            ignore: false,
            escape: true,
            strict: false,
        }
    }
}

/// Where the emitter is in its lifecycle.
///
/// Flushing is not a resting state: a full batch is written out inside the
/// call that completed it, and the emitter is back in `Accumulating` when the
/// call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    /// Next record is the header
    AwaitingHeader,
    /// Data rows are being collected into the current batch
    Accumulating,
    /// Input exhausted, final batch written
    Done,
}

/// Counters describing what was emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Header columns
    pub columns: usize,
    /// Data rows rendered
    pub data_rows: usize,
    /// Statements written
    pub statements: usize,
    /// Data rows whose field count differed from the header
    pub ragged_rows: usize,
}
