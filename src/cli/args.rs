//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use super::OutputFormat;
use crate::client::IN_MEMORY;

const EXAMPLES: &str = "\
Examples:
  # List tables
  duckdb-cli --db mydb.duckdb tables

  # Run a query
  duckdb-cli --db mydb.duckdb query \"SELECT * FROM users LIMIT 10\"

  # Run a SQL file
  duckdb-cli --db mydb.duckdb file queries.sql

  # Show a table's columns
  duckdb-cli --db mydb.duckdb describe users

  # Export to CSV
  duckdb-cli --db mydb.duckdb export-csv \"SELECT * FROM sales\" output.csv

  # Import a CSV file
  duckdb-cli --db mydb.duckdb import-csv data.csv users";

/// Simple command-line tool for DuckDB.
#[derive(Parser, Debug)]
#[command(name = "duckdb-cli")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Database file path (default: in-memory)
    #[arg(long = "db", value_name = "PATH", env = "DUCKDB_CLI_DB", default_value = IN_MEMORY, global = true)]
    pub db: String,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Database path, or `None` for an in-memory database.
    pub fn database(&self) -> Option<&Path> {
        if self.db.is_empty() || self.db == IN_MEMORY {
            None
        } else {
            Some(Path::new(&self.db))
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Execute SQL query
    Query {
        /// SQL query to execute
        query: String,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Export result to CSV file instead of displaying
        #[arg(long = "output-csv", value_name = "FILE", conflicts_with = "output_parquet")]
        output_csv: Option<PathBuf>,

        /// Export result to Parquet file instead of displaying
        #[arg(long = "output-parquet", value_name = "FILE")]
        output_parquet: Option<PathBuf>,
    },

    /// Execute SQL file
    File {
        /// SQL file path
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List all tables
    Tables {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Describe table structure
    Describe {
        /// Table name
        table: String,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Show sample data from table
    Sample {
        /// Table name
        table: String,

        /// Number of rows to display
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i64,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Export query result to CSV
    ExportCsv {
        /// SQL query
        query: String,

        /// Output CSV file path
        output: PathBuf,
    },

    /// Export query result to Parquet
    ExportParquet {
        /// SQL query
        query: String,

        /// Output Parquet file path
        output: PathBuf,
    },

    /// Import CSV file to table
    ImportCsv {
        /// CSV file path
        file: PathBuf,

        /// Target table name
        table: String,
    },

    /// Import Parquet file to table
    ImportParquet {
        /// Parquet file path
        file: PathBuf,

        /// Target table name
        table: String,
    },
}

impl Command {
    /// Prefix for the error line logged when the command fails.
    pub fn failure_label(&self) -> &'static str {
        match self {
            Command::Query { .. } => "Query execution failed",
            Command::File { .. } => "File execution failed",
            Command::Tables { .. } => "Failed to show tables",
            Command::Describe { .. } => "Failed to describe table",
            Command::Sample { .. } => "Failed to get sample data",
            Command::ExportCsv { .. } => "CSV export failed",
            Command::ExportParquet { .. } => "Parquet export failed",
            Command::ImportCsv { .. } => "CSV import failed",
            Command::ImportParquet { .. } => "Parquet import failed",
        }
    }
}
