//! Batch emitter.
//!
//! Turns a sequence of records into batched INSERT statements. The first
//! record is taken as the column list; every later record becomes one
//! value-tuple. Tuples are collected into the current statement until
//! `rows_per_statement` is reached, then the statement is written out with
//! its terminator. A batch is only started when a data row arrives, so input
//! with no data rows produces no output at all.

mod flush;
mod types;

use std::io::Write;

use crate::config::TUPLE_SEPARATOR;
use crate::error_handling::EmitError;
use crate::sql::ValueFormatter;

pub use types::{EmitOptions, EmitSummary, EmitterState};

/// Builds INSERT statements from records and writes them to `W`.
///
/// The formatter is injected so the escaping rules can be swapped without
/// touching the batching logic.
pub struct BatchEmitter<W: Write, F: ValueFormatter> {
    writer: W,
    formatter: F,
    options: EmitOptions,
    state: EmitterState,
    columns: Vec<String>,
    prefix: String,
    statement: String,
    batch_rows: usize,
    summary: EmitSummary,
}

impl<W: Write, F: ValueFormatter> BatchEmitter<W, F> {
    /// Creates an emitter waiting for the header record.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::ZeroRowsPerStatement`] if `options.rows_per_statement`
    /// is 0.
    pub fn new(writer: W, formatter: F, options: EmitOptions) -> Result<Self, EmitError> {
        if options.rows_per_statement == 0 {
            return Err(EmitError::ZeroRowsPerStatement);
        }
        Ok(BatchEmitter {
            writer,
            formatter,
            options,
            state: EmitterState::AwaitingHeader,
            columns: Vec::new(),
            prefix: String::new(),
            statement: String::new(),
            batch_rows: 0,
            summary: EmitSummary::default(),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Column names captured from the header (empty until it arrives).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Counters so far.
    pub fn summary(&self) -> &EmitSummary {
        &self.summary
    }

    /// Feeds the next record.
    ///
    /// The first record becomes the column list. Each later record is
    /// formatted and appended to the current batch; a full batch is written
    /// immediately.
    ///
    /// # Errors
    ///
    /// - [`EmitError::Format`] if a value cannot be escaped
    /// - [`EmitError::FieldCountMismatch`] for a ragged row in strict mode
    /// - [`EmitError::Io`] if writing a full batch fails
    /// - [`EmitError::Finished`] if called after [`finish`](Self::finish)
    pub fn push_record<I, S>(&mut self, record: I) -> Result<(), EmitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.state {
            EmitterState::AwaitingHeader => {
                self.set_header(record);
                Ok(())
            }
            EmitterState::Accumulating => self.push_data_row(record),
            EmitterState::Done => Err(EmitError::Finished),
        }
    }

    /// Writes the final partial batch, if any, and flushes the writer.
    ///
    /// Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Io`] if the final write or flush fails.
    pub fn finish(&mut self) -> Result<EmitSummary, EmitError> {
        if self.state == EmitterState::Done {
            return Ok(self.summary.clone());
        }
        if self.state == EmitterState::AwaitingHeader {
            log::warn!("Input has no header record; nothing to convert");
        } else if self.summary.data_rows == 0 {
            log::warn!("Input has a header but no data rows; no statements written");
        }

        self.flush_statement()?;
        self.writer.flush()?;
        self.state = EmitterState::Done;
        Ok(self.summary.clone())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn set_header<I, S>(&mut self, record: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.columns = record
            .into_iter()
            .map(|column| column.as_ref().to_string())
            .collect();
        self.prefix = self.formatter.format_insert_prefix(
            self.options.ignore,
            &self.options.table,
            &self.columns,
        );
        self.summary.columns = self.columns.len();
        self.state = EmitterState::Accumulating;
        log::debug!(
            "Header for {} has {} columns: {}",
            self.options.table,
            self.columns.len(),
            self.columns.join(", ")
        );
    }

    fn push_data_row<I, S>(&mut self, record: I) -> Result<(), EmitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let row = self.summary.data_rows + 1;
        let fields: Vec<S> = record.into_iter().collect();

        if fields.len() != self.columns.len() {
            if self.options.strict {
                return Err(EmitError::FieldCountMismatch {
                    row,
                    expected: self.columns.len(),
                    found: fields.len(),
                });
            }
            self.summary.ragged_rows += 1;
            log::warn!(
                "Data row {} has {} fields but the header has {}; passing it through as-is",
                row,
                fields.len(),
                self.columns.len()
            );
        }

        let tuple = if self.options.escape {
            let escaped = fields
                .iter()
                .map(|value| self.formatter.escape(value.as_ref()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| EmitError::Format { row, source })?;
            self.formatter.format_value_tuple(&escaped)
        } else {
            self.formatter.format_value_tuple(&fields)
        };

        if self.batch_rows == 0 {
            self.statement.push_str(&self.prefix);
        } else {
            self.statement.push_str(TUPLE_SEPARATOR);
        }
        self.statement.push_str(&tuple);
        self.batch_rows += 1;
        self.summary.data_rows = row;

        if self.batch_rows >= self.options.rows_per_statement {
            self.flush_statement()?;
        }
        Ok(())
    }
}
