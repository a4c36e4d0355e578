//! duckdb-cli entry point.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use duckdb_cli::cli::{dispatch, Cli};
use duckdb_cli::{DuckDbClient, Error};

fn main() -> ExitCode {
    // Parse command line arguments
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();
    debug!("Verbose mode enabled");

    let Some(command) = &args.command else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let mut client = match DuckDbClient::open(args.database()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to connect to database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = dispatch(&client, command, &mut io::stdout().lock());
    client.close();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            if let Some(sql) = e.downcast_ref::<Error>().and_then(Error::sql) {
                debug!("Failed SQL: {sql}");
            }
            debug!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
