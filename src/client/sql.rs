//! Fixed statement templates sent to the engine.
//!
//! Table names are interpolated verbatim, so callers passing untrusted
//! identifiers can inject SQL. File paths are embedded as string literals
//! with single quotes doubled.

use std::path::Path;

/// Lists every table in the current database.
pub const SHOW_TABLES: &str = "SHOW TABLES";

/// Column names and types of one table.
pub fn describe(table: &str) -> String {
    format!("DESCRIBE {table}")
}

/// First `limit` rows of a table.
pub fn sample(table: &str, limit: i64) -> String {
    format!("SELECT * FROM {table} LIMIT {limit}")
}

/// Native bulk copy of a query result into a Parquet file.
pub fn copy_to_parquet(query: &str, output: &Path) -> String {
    format!(
        "COPY ({}) TO {} (FORMAT PARQUET)",
        strip_terminator(query),
        literal(output)
    )
}

/// Create a table from a CSV file, letting the engine infer the columns.
pub fn create_from_csv(table: &str, source: &Path) -> String {
    format!(
        "CREATE TABLE {table} AS SELECT * FROM read_csv_auto({})",
        literal(source)
    )
}

/// Create a table from a Parquet file.
pub fn create_from_parquet(table: &str, source: &Path) -> String {
    format!(
        "CREATE TABLE {table} AS SELECT * FROM read_parquet({})",
        literal(source)
    )
}

/// Quote a path as a SQL string literal.
fn literal(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', "''"))
}

/// Drop trailing semicolons so a query can be nested in parentheses.
fn strip_terminator(query: &str) -> &str {
    query.trim_end().trim_end_matches(';').trim_end()
}
