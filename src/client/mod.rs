//! Engine client module.
//!
//! [`DuckDbClient`] owns a single DuckDB connection and exposes the handful of
//! operations the command line needs. Each operation sends exactly one
//! statement to the engine.

pub mod sql;
mod table;

pub use table::ResultTable;

use std::fs;
use std::io;
use std::path::Path;

use duckdb::arrow::array::RecordBatch;
use duckdb::types::Value;
use duckdb::{params, params_from_iter, Connection, Params};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::export::Exporter;

/// Display name used for in-memory databases.
pub const IN_MEMORY: &str = ":memory:";

/// Client over one DuckDB connection.
///
/// The connection is released by [`DuckDbClient::close`] or on drop,
/// whichever comes first. Any operation after release fails with
/// [`Error::Closed`].
pub struct DuckDbClient {
    conn: Option<Connection>,
    target: String,
}

impl DuckDbClient {
    /// Open a database file, or an in-memory database when `path` is `None`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let (conn, target) = match path {
            Some(path) => (Connection::open(path), path.display().to_string()),
            None => (Connection::open_in_memory(), IN_MEMORY.to_string()),
        };

        let conn = conn.map_err(|e| Error::Connection {
            path: target.clone(),
            reason: e.to_string(),
        })?;

        info!("Connected to DuckDB: {target}");
        Ok(Self {
            conn: Some(conn),
            target,
        })
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    /// Path of the database, or `:memory:`.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(Error::Closed)
    }

    /// Execute a SQL statement and collect its full result.
    pub fn execute_query(&self, sql: &str) -> Result<ResultTable> {
        self.run_query(sql, params![])
    }

    /// Execute a SQL statement with positional `?` parameters.
    pub fn execute_query_with_params(&self, sql: &str, values: &[Value]) -> Result<ResultTable> {
        self.run_query(sql, params_from_iter(values.iter()))
    }

    fn run_query<P: Params>(&self, sql: &str, params: P) -> Result<ResultTable> {
        if sql.contains('\0') {
            return Err(Error::query(sql, "SQL contains null bytes"));
        }
        let conn = self.conn()?;

        debug!("Executing query: {sql}");
        let mut stmt = conn.prepare(sql).map_err(|e| fail(sql, e))?;
        let arrow = stmt.query_arrow(params).map_err(|e| fail(sql, e))?;
        let schema = arrow.get_schema();
        let batches: Vec<RecordBatch> = arrow.collect();

        let table = ResultTable::new(schema, batches);
        info!("Query executed successfully: {} rows returned", table.num_rows());
        Ok(table)
    }

    /// Run a statement whose result is not needed (DDL, COPY).
    fn execute_statement(&self, sql: &str) -> Result<()> {
        if sql.contains('\0') {
            return Err(Error::query(sql, "SQL contains null bytes"));
        }
        let conn = self.conn()?;

        debug!("Executing statement: {sql}");
        conn.execute_batch(sql).map_err(|e| fail(sql, e))
    }

    /// Read a SQL file and execute its contents as one query.
    ///
    /// A missing file is reported before the connection is touched.
    pub fn execute_file(&self, path: &Path) -> Result<ResultTable> {
        ensure_exists(path)?;

        info!("Executing SQL file: {}", path.display());
        let sql = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.execute_query(&sql)
    }

    /// List all tables in the database.
    pub fn show_tables(&self) -> Result<ResultTable> {
        self.execute_query(sql::SHOW_TABLES)
    }

    /// Column names and types of `table`.
    pub fn describe_table(&self, table: &str) -> Result<ResultTable> {
        self.execute_query(&sql::describe(table))
    }

    /// First `limit` rows of `table`.
    pub fn sample_table(&self, table: &str, limit: i64) -> Result<ResultTable> {
        self.execute_query(&sql::sample(table, limit))
    }

    /// Run a query and write its result to a CSV file.
    ///
    /// Returns the number of data rows written. An existing file is
    /// overwritten.
    pub fn export_to_csv(&self, sql: &str, output: &Path) -> Result<usize> {
        info!("Exporting query result to CSV: {}", output.display());

        let table = self.execute_query(sql)?;
        let rows = Exporter::write_csv(output, &table).map_err(|source| Error::Write {
            path: output.to_path_buf(),
            source,
        })?;

        info!("Successfully exported {rows} rows to {}", output.display());
        Ok(rows)
    }

    /// Write a query result to a Parquet file with the engine's `COPY`.
    pub fn export_to_parquet(&self, sql: &str, output: &Path) -> Result<()> {
        info!("Exporting query result to Parquet: {}", output.display());

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(Error::Write {
                    path: output.to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::NotFound,
                        "parent directory does not exist",
                    ),
                });
            }
        }

        self.execute_statement(&sql::copy_to_parquet(sql, output))?;

        info!("Successfully exported to {}", output.display());
        Ok(())
    }

    /// Create `table` from a CSV file.
    pub fn import_csv(&self, path: &Path, table: &str) -> Result<()> {
        ensure_exists(path)?;

        info!("Importing CSV to table '{table}': {}", path.display());
        self.execute_statement(&sql::create_from_csv(table, path))?;

        info!("Successfully imported {} to table '{table}'", path.display());
        Ok(())
    }

    /// Create `table` from a Parquet file.
    pub fn import_parquet(&self, path: &Path, table: &str) -> Result<()> {
        ensure_exists(path)?;

        info!("Importing Parquet to table '{table}': {}", path.display());
        self.execute_statement(&sql::create_from_parquet(table, path))?;

        info!("Successfully imported {} to table '{table}'", path.display());
        Ok(())
    }

    /// Release the connection. Safe to call any number of times.
    pub fn close(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };

        match conn.close() {
            Ok(()) => info!("Database connection closed"),
            Err((_, e)) => warn!("Error while closing database connection: {e}"),
        }
    }
}

impl Drop for DuckDbClient {
    fn drop(&mut self) {
        self.close();
    }
}

fn fail(sql: &str, err: duckdb::Error) -> Error {
    debug!("Query failed: {err}");
    Error::query(sql, err)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::NotFound {
            path: path.to_path_buf(),
        })
    }
}
