//! Tests for command dispatch and the compiled binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command as Process, Output};

use clap::Parser;
use duckdb_cli::cli::{dispatch, Cli, Command, OutputFormat};
use duckdb_cli::DuckDbClient;
use tempfile::tempdir;

fn run(client: &DuckDbClient, command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    dispatch(client, &command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn bin(args: &[&str]) -> Output {
    Process::new(env!("CARGO_BIN_EXE_duckdb-cli"))
        .args(args)
        .env_remove("DUCKDB_CLI_DB")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_tables_on_fresh_database() {
    let client = DuckDbClient::open_in_memory().unwrap();
    let output = run(
        &client,
        Command::Tables {
            format: OutputFormat::Psql,
        },
    )
    .unwrap();

    assert_eq!(output, "No results.\n");
}

#[test]
fn test_query_prints_table_and_footer() {
    let client = DuckDbClient::open_in_memory().unwrap();
    let output = run(
        &client,
        Command::Query {
            query: "SELECT 1 AS a, 2 AS b".to_string(),
            format: OutputFormat::Markdown,
            output_csv: None,
            output_parquet: None,
        },
    )
    .unwrap();

    assert!(output.starts_with("| a | b |\n"));
    assert!(output.contains("| 1 | 2 |"));
    assert!(output.ends_with("(1 rows)\n"));
}

#[test]
fn test_query_with_csv_output_skips_rendering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let client = DuckDbClient::open_in_memory().unwrap();
    let output = run(
        &client,
        Command::Query {
            query: "SELECT * FROM range(4)".to_string(),
            format: OutputFormat::Psql,
            output_csv: Some(path.clone()),
            output_parquet: None,
        },
    )
    .unwrap();

    assert_eq!(
        output,
        format!("Successfully exported 4 rows to: {}\n", path.display())
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "range\n0\n1\n2\n3\n");
}

#[test]
fn test_import_then_sample() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("users.csv");
    fs::write(&csv, "id,name\n1,Alice\n2,Bob\n3,Carol\n").unwrap();

    let client = DuckDbClient::open_in_memory().unwrap();
    let output = run(
        &client,
        Command::ImportCsv {
            file: csv.clone(),
            table: "users".to_string(),
        },
    )
    .unwrap();
    assert_eq!(
        output,
        format!("Successfully imported {} to table 'users'\n", csv.display())
    );

    let output = run(
        &client,
        Command::Sample {
            table: "users".to_string(),
            limit: 2,
            format: OutputFormat::Plain,
        },
    )
    .unwrap();
    assert!(output.contains("Alice"));
    assert!(output.contains("Bob"));
    assert!(!output.contains("Carol"));
    assert!(output.ends_with("(2 rows)\n"));
}

#[test]
fn test_export_parquet_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.parquet");

    let client = DuckDbClient::open_in_memory().unwrap();
    let output = run(
        &client,
        Command::ExportParquet {
            query: "SELECT 42 AS answer".to_string(),
            output: path.clone(),
        },
    )
    .unwrap();

    assert_eq!(output, format!("Successfully exported to: {}\n", path.display()));
    assert!(path.exists());
}

#[test]
fn test_failure_carries_operation_label() {
    let client = DuckDbClient::open_in_memory().unwrap();
    let mut out = Vec::new();
    let err = dispatch(
        &client,
        &Command::Describe {
            table: "users".to_string(),
            format: OutputFormat::Psql,
        },
        &mut out,
    )
    .unwrap_err();

    assert!(format!("{err:#}").starts_with("Failed to describe table: "));
    assert!(err.downcast_ref::<duckdb_cli::Error>().is_some());
    assert!(out.is_empty());
}

#[test]
fn test_missing_sql_file() {
    let client = DuckDbClient::open_in_memory().unwrap();
    let err = run(
        &client,
        Command::File {
            file: PathBuf::from("/no/such/query.sql"),
            format: OutputFormat::Psql,
        },
    )
    .unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "File execution failed: file not found: /no/such/query.sql"
    );
}

#[test]
fn test_parse_and_dispatch() {
    let cli = Cli::try_parse_from(["duckdb-cli", "query", "SELECT 'x' AS v", "--format", "simple"])
        .unwrap();
    let client = DuckDbClient::open(cli.database()).unwrap();
    let output = run(&client, cli.command.unwrap()).unwrap();
    assert!(output.contains('x'));
}

#[test]
fn test_binary_without_command_prints_help() {
    let output = bin(&[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_binary_unknown_command_fails() {
    let output = bin(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_binary_query_success() {
    let output = bin(&["query", "SELECT 1 AS a, 2 AS b"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(1 rows)"));
}

#[test]
fn test_binary_describe_missing_table() {
    let output = bin(&["describe", "users"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let errors: Vec<&str> = stderr.lines().filter(|l| l.contains("ERROR")).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Failed to describe table"));
}

#[test]
fn test_binary_persists_between_invocations() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("cli.duckdb");
    let db = db.to_str().unwrap();

    let output = bin(&["--db", db, "query", "CREATE TABLE t AS SELECT 1 AS x"]);
    assert!(output.status.success());

    let output = bin(&["--db", db, "tables", "--format", "plain"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains('t'));
}
