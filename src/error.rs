//! Error types for duckdb-cli.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for engine client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The database could not be opened or created
    #[error("cannot open database {path}: {reason}")]
    Connection { path: String, reason: String },

    /// The engine rejected or failed to run a statement
    #[error("{reason}")]
    Query { sql: String, reason: String },

    /// A referenced input file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// An input file exists but could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The connection was already released
    #[error("database connection is closed")]
    Closed,
}

impl Error {
    pub(crate) fn query(sql: &str, err: impl std::fmt::Display) -> Self {
        Error::Query {
            sql: sql.to_string(),
            reason: err.to_string(),
        }
    }

    /// SQL text attached to a query failure, if any.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Error::Query { sql, .. } => Some(sql),
            _ => None,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
