//! End-to-end conversion tests: input file in, SQL file out.

mod helpers;

use csv2sql::{run_conversion, Config};
use helpers::{config_for, read_output, statements, tuples, unescape, write_input};
use tempfile::TempDir;

#[test]
fn test_people_scenario() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "people.csv", "id;name\n1;Alice\n2;Bob\n3;Carol\n");

    let report = run_conversion(Config {
        rows_per_statement: 2,
        ..config_for(&input)
    })
    .expect("Conversion should succeed");

    assert_eq!(report.data_rows, 3);
    assert_eq!(report.statements, 2);
    assert_eq!(report.columns, 2);
    assert_eq!(report.table, "people");
    assert_eq!(report.output_path, dir.path().join("people.csv.sql"));

    let sql = read_output(&report.output_path);
    assert_eq!(
        sql,
        "INSERT INTO people (id, name) VALUES (\"1\", \"Alice\"), (\"2\", \"Bob\");\n\
         INSERT INTO people (id, name) VALUES (\"3\", \"Carol\");\n"
    );
}

#[test]
fn test_header_only_creates_empty_output() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "people.csv", "id;name\n");

    let report = run_conversion(config_for(&input)).expect("Conversion should succeed");

    assert_eq!(report.statements, 0);
    assert_eq!(report.data_rows, 0);
    assert!(report.output_path.exists(), "Output file should be created");
    assert_eq!(read_output(&report.output_path), "");
}

#[test]
fn test_empty_input_creates_empty_output() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "empty.csv", "");

    let report = run_conversion(config_for(&input)).expect("Conversion should succeed");

    assert_eq!(report.statements, 0);
    assert_eq!(report.columns, 0);
    assert_eq!(read_output(&report.output_path), "");
}

#[test]
fn test_statement_count_and_batch_sizes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (n, k) in [(1usize, 1usize), (10, 3), (12, 4), (250, 100), (99, 100)] {
        let mut contents = String::from("a;b;c\n");
        for i in 0..n {
            contents.push_str(&format!("{};x{};y{}\n", i, i, i));
        }
        let input = write_input(&dir, &format!("rows_{}_{}.csv", n, k), &contents);

        let report = run_conversion(Config {
            rows_per_statement: k,
            ..config_for(&input)
        })
        .expect("Conversion should succeed");

        let sql = read_output(&report.output_path);
        let stmts = statements(&sql);
        assert_eq!(stmts.len(), n.div_ceil(k), "n={} k={}", n, k);
        assert_eq!(report.statements, stmts.len());

        let sizes: Vec<usize> = stmts.iter().map(|s| tuples(s).len()).collect();
        let (last, full) = sizes.split_last().expect("At least one statement");
        assert!(full.iter().all(|&size| size == k), "n={} k={}", n, k);
        let expected_last = if n % k == 0 { k } else { n % k };
        assert_eq!(*last, expected_last, "n={} k={}", n, k);
    }
}

#[test]
fn test_column_order_verbatim_in_every_statement() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(
        &dir,
        "orders.csv",
        "Zeta Col,`alpha`,mid_1\n1,2,3\n4,5,6\n7,8,9\n",
    );

    let report = run_conversion(Config {
        delimiter: ',',
        rows_per_statement: 2,
        ..config_for(&input)
    })
    .expect("Conversion should succeed");

    let sql = read_output(&report.output_path);
    for stmt in statements(&sql) {
        assert!(
            stmt.starts_with("INSERT INTO orders (Zeta Col, `alpha`, mid_1) VALUES "),
            "unexpected statement: {}",
            stmt
        );
    }
}

#[test]
fn test_round_trip_reconstructs_rows() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let rows = [
        ["1", "plain"],
        ["2", "with \"double\" quotes"],
        ["3", "back\\slash"],
        ["4", "it's"],
        ["5", "ctrl\x1az"],
        ["6", ""],
        ["7", "Zażółć gęślą jaźń"],
    ];
    let mut contents = String::from("id|text\n");
    for [id, text] in &rows {
        // Quote every field so embedded quotes survive the CSV layer
        contents.push_str(&format!("{}|\"{}\"\n", id, text.replace('"', "\"\"")));
    }
    let input = write_input(&dir, "texts.csv", &contents);

    let report = run_conversion(Config {
        delimiter: '|',
        rows_per_statement: 3,
        ..config_for(&input)
    })
    .expect("Conversion should succeed");

    let sql = read_output(&report.output_path);
    let reconstructed: Vec<Vec<String>> = statements(&sql)
        .into_iter()
        .flat_map(tuples)
        .map(|tuple| {
            let inner = tuple
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .expect("tuple should be quoted");
            let (id, text) = inner.split_once("\", \"").expect("two values");
            vec![unescape(id), unescape(text)]
        })
        .collect();
    let expected: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|v| v.to_string()).collect())
        .collect();
    assert_eq!(reconstructed, expected);
}

#[test]
fn test_escaped_statement_keeps_quotes_balanced() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "evil.csv", "v\n\"\"\"); DROP TABLE x; --\"\n\\\n");

    let report = run_conversion(config_for(&input)).expect("Conversion should succeed");
    let sql = read_output(&report.output_path);

    assert_eq!(
        sql,
        "INSERT INTO evil (v) VALUES (\"\\\"); DROP TABLE x; --\"), (\"\\\\\");\n"
    );
}

#[test]
fn test_ignore_flag_in_every_statement() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "ids.csv", "id\n1\n2\n3\n4\n5\n");

    let report = run_conversion(Config {
        ignore: true,
        rows_per_statement: 2,
        ..config_for(&input)
    })
    .expect("Conversion should succeed");

    let sql = read_output(&report.output_path);
    let stmts = statements(&sql);
    assert_eq!(stmts.len(), 3);
    assert!(stmts.iter().all(|s| s.starts_with("INSERT IGNORE INTO ids (id) VALUES ")));
}

#[test]
fn test_no_ignore_flag_has_no_ignore_token() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "ids.csv", "id\n1\n2\n");

    let report = run_conversion(config_for(&input)).expect("Conversion should succeed");
    let sql = read_output(&report.output_path);
    assert!(sql.starts_with("INSERT INTO ids (id) VALUES "));
    assert!(!sql.contains("IGNORE"));
}

#[test]
fn test_no_escape_writes_raw_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "raw.csv", "v\nNOW()\\n\n");

    let report = run_conversion(Config {
        escape: false,
        ..config_for(&input)
    })
    .expect("Conversion should succeed");

    assert_eq!(
        read_output(&report.output_path),
        "INSERT INTO raw (v) VALUES (\"NOW()\\n\");\n"
    );
}

#[test]
fn test_explicit_output_and_table() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "export.2024.csv", "id\n1\n");
    let output = dir.path().join("custom.sql");

    let report = run_conversion(Config {
        output: Some(output.clone()),
        table: Some("customers".to_string()),
        ..config_for(&input)
    })
    .expect("Conversion should succeed");

    assert_eq!(report.output_path, output);
    assert_eq!(
        read_output(&output),
        "INSERT INTO customers (id) VALUES (\"1\");\n"
    );
    assert!(!dir.path().join("export.2024.csv.sql").exists());
}

#[test]
fn test_default_table_stops_at_first_dot() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "export.2024.csv", "id\n1\n");

    let report = run_conversion(config_for(&input)).expect("Conversion should succeed");
    assert_eq!(report.table, "export");
    assert_eq!(report.output_path, dir.path().join("export.2024.csv.sql"));
}

#[test]
fn test_ragged_rows_pass_through_by_default() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "ragged.csv", "a;b\n1\n2;3\n");

    let report = run_conversion(config_for(&input)).expect("Conversion should succeed");
    assert_eq!(report.ragged_rows, 1);
    assert_eq!(
        read_output(&report.output_path),
        "INSERT INTO ragged (a, b) VALUES (\"1\"), (\"2\", \"3\");\n"
    );
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "people.csv", "id\n1\n");
    let output = write_input(&dir, "people.csv.sql", "stale contents\n");

    run_conversion(config_for(&input)).expect("Conversion should succeed");
    assert_eq!(read_output(&output), "INSERT INTO people (id) VALUES (\"1\");\n");
}

#[test]
fn test_large_input_streams() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut contents = String::from("id;name\n");
    for i in 0..20_000 {
        contents.push_str(&format!("{};name {}\n", i, i));
    }
    let input = write_input(&dir, "big.csv", &contents);

    let report = run_conversion(config_for(&input)).expect("Conversion should succeed");
    assert_eq!(report.data_rows, 20_000);
    assert_eq!(report.statements, 200);
    let sql = read_output(&report.output_path);
    assert_eq!(statements(&sql).len(), 200);
}
