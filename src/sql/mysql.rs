//! MySQL rendering rules.
//!
//! Escaping follows `mysql_real_escape_string`: NUL, line feed, carriage
//! return, backslash, both quote characters and Ctrl-Z are backslash-escaped.
//! Values are wrapped in double quotes, identifiers are written verbatim.

use std::borrow::Cow;

fn needs_escape(c: char) -> bool {
    matches!(c, '\0' | '\n' | '\r' | '\\' | '\'' | '"' | '\x1a')
}

pub(super) fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.chars().any(needs_escape) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '\0' => escaped.push_str("\\0"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\x1a' => escaped.push_str("\\Z"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

pub(super) fn value_tuple<S: AsRef<str>>(values: &[S]) -> String {
    let mut tuple = String::from("(");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            tuple.push_str(", ");
        }
        tuple.push('"');
        tuple.push_str(value.as_ref());
        tuple.push('"');
    }
    tuple.push(')');
    tuple
}

pub(super) fn insert_prefix<S: AsRef<str>>(ignore: bool, table: &str, columns: &[S]) -> String {
    let columns = columns
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    let keyword = if ignore { "INSERT IGNORE INTO" } else { "INSERT INTO" };
    format!("{} {} ({}) VALUES ", keyword, table, columns)
}
