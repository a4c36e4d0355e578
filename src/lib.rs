//! duckdb-cli - Run SQL against DuckDB databases from the command line.
//!
//! The library wraps a single DuckDB connection in [`DuckDbClient`], which
//! offers query execution, table inspection, and CSV/Parquet import and
//! export. The [`cli`] module turns parsed arguments into client calls and
//! renders the results.
//!
//! # Example
//!
//! ```no_run
//! use duckdb_cli::DuckDbClient;
//!
//! fn main() -> duckdb_cli::Result<()> {
//!     let client = DuckDbClient::open_in_memory()?;
//!     let result = client.execute_query("SELECT 42 AS answer")?;
//!     assert_eq!(result.num_rows(), 1);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod error;
pub mod export;

pub use client::{DuckDbClient, ResultTable};
pub use error::{Error, Result};
