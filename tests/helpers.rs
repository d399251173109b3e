// Shared test helpers for input files and generated SQL inspection.

use std::fs;
use std::path::{Path, PathBuf};

use csv2sql::Config;
use tempfile::TempDir;

/// Writes `contents` to `name` inside `dir` and returns its path.
pub fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test input");
    path
}

/// A config reading `input` with every other option at its default.
#[allow(dead_code)] // Used by other test files
pub fn config_for(input: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        ..Default::default()
    }
}

/// Reads the generated SQL file.
#[allow(dead_code)] // Used by other test files
pub fn read_output(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read generated SQL")
}

/// Splits a generated file into statements, checking each one's terminator.
#[allow(dead_code)] // Used by other test files
pub fn statements(sql: &str) -> Vec<&str> {
    sql.lines()
        .map(|line| {
            line.strip_suffix(';')
                .unwrap_or_else(|| panic!("statement not terminated: {}", line))
        })
        .collect()
}

/// Value-tuples of one statement, without the surrounding parentheses.
#[allow(dead_code)] // Used by other test files
pub fn tuples(statement: &str) -> Vec<&str> {
    let (_, values) = statement
        .split_once(" VALUES ")
        .unwrap_or_else(|| panic!("no VALUES clause: {}", statement));
    values
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .unwrap_or_else(|| panic!("malformed VALUES clause: {}", values))
        .split("), (")
        .collect()
}

/// Reverses MySQL string escaping.
#[allow(dead_code)] // Used by other test files
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('\0'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('Z') => out.push('\x1a'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
