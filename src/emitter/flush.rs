//! Statement flushing logic.

use std::io::Write;

use crate::config::STATEMENT_TERMINATOR;
use crate::error_handling::EmitError;
use crate::sql::ValueFormatter;

use super::BatchEmitter;

impl<W: Write, F: ValueFormatter> BatchEmitter<W, F> {
    /// Writes the pending statement, if any, and starts a new batch.
    ///
    /// An empty buffer writes nothing, so header-only input produces no
    /// statements.
    pub(super) fn flush_statement(&mut self) -> Result<(), EmitError> {
        if self.batch_rows == 0 {
            return Ok(());
        }

        self.writer.write_all(self.statement.as_bytes())?;
        self.writer.write_all(STATEMENT_TERMINATOR.as_bytes())?;
        self.summary.statements += 1;

        log::debug!(
            "Wrote statement {} with {} rows into {}",
            self.summary.statements,
            self.batch_rows,
            self.options.table
        );

        self.statement.clear();
        self.batch_rows = 0;
        Ok(())
    }
}
