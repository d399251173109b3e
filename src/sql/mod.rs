//! SQL value formatting.
//!
//! A [`ValueFormatter`] knows how one database dialect escapes raw strings and
//! renders INSERT statements. [`SqlDialect`] is the closed set of dialects the
//! tool ships with; it is chosen once from the configuration and handed to the
//! batch emitter. Adding a dialect means adding a variant and its module.

mod mysql;

use std::borrow::Cow;

use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::FormatError;

/// Escaping and rendering rules of a target database.
pub trait ValueFormatter {
    /// Dialect name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Escapes characters that would break out of a quoted string literal.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when the value cannot be represented.
    fn escape<'a>(&self, raw: &'a str) -> Result<Cow<'a, str>, FormatError>;

    /// Renders one row as a value-tuple, keeping the order of `values`.
    fn format_value_tuple<S: AsRef<str>>(&self, values: &[S]) -> String;

    /// Renders `INSERT [IGNORE] INTO <table> (<columns>) VALUES `.
    fn format_insert_prefix<S: AsRef<str>>(&self, ignore: bool, table: &str, columns: &[S])
        -> String;
}

/// Supported SQL dialects.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SqlDialect {
    /// MySQL / MariaDB
    #[value(name = "mysql")]
    #[strum(serialize = "mysql")]
    MySql,
}

impl ValueFormatter for SqlDialect {
    fn name(&self) -> &'static str {
        match self {
            SqlDialect::MySql => "mysql",
        }
    }

    fn escape<'a>(&self, raw: &'a str) -> Result<Cow<'a, str>, FormatError> {
        match self {
            SqlDialect::MySql => Ok(mysql::escape(raw)),
        }
    }

    fn format_value_tuple<S: AsRef<str>>(&self, values: &[S]) -> String {
        match self {
            SqlDialect::MySql => mysql::value_tuple(values),
        }
    }

    fn format_insert_prefix<S: AsRef<str>>(
        &self,
        ignore: bool,
        table: &str,
        columns: &[S],
    ) -> String {
        match self {
            SqlDialect::MySql => mysql::insert_prefix(ignore, table, columns),
        }
    }
}
