//! Delimited record input.
//!
//! Records are read with the `csv` crate using a single-byte delimiter and
//! `"` as the quote character. Headers are not treated specially here (the
//! emitter takes the first record as the column list) and records may have
//! any number of fields. Blank lines are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder};

fn builder(delimiter: u8) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true);
    builder
}

/// Opens `path` for reading delimited records.
///
/// # Errors
///
/// Returns a `csv::Error` if the file cannot be opened.
pub fn open_input(path: &Path, delimiter: u8) -> csv::Result<Reader<File>> {
    builder(delimiter).from_path(path)
}

/// Wraps any reader for reading delimited records.
pub fn records_from_reader<R: Read>(reader: R, delimiter: u8) -> Reader<R> {
    builder(delimiter).from_reader(reader)
}
