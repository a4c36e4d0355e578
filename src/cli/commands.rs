//! Command handlers.
//!
//! Each handler performs one engine client operation and writes either the
//! rendered result or a one-line success message to `out`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::{Command, OutputFormat, OutputFormatter};
use crate::client::{DuckDbClient, ResultTable};

/// Run `command` against `client`, writing user-facing output to `out`.
///
/// Errors carry the command's failure label as context.
pub fn dispatch<W: Write>(client: &DuckDbClient, command: &Command, out: &mut W) -> Result<()> {
    run(client, command, out).context(command.failure_label())
}

fn run<W: Write>(client: &DuckDbClient, command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::Query {
            query,
            format,
            output_csv,
            output_parquet,
        } => {
            if let Some(path) = output_csv {
                export_csv(client, query, path, out)
            } else if let Some(path) = output_parquet {
                export_parquet(client, query, path, out)
            } else {
                print(&client.execute_query(query)?, *format, out)
            }
        }
        Command::File { file, format } => print(&client.execute_file(file)?, *format, out),
        Command::Tables { format } => print(&client.show_tables()?, *format, out),
        Command::Describe { table, format } => {
            print(&client.describe_table(table)?, *format, out)
        }
        Command::Sample {
            table,
            limit,
            format,
        } => print(&client.sample_table(table, *limit)?, *format, out),
        Command::ExportCsv { query, output } => export_csv(client, query, output, out),
        Command::ExportParquet { query, output } => export_parquet(client, query, output, out),
        Command::ImportCsv { file, table } => {
            client.import_csv(file, table)?;
            imported(file, table, out)
        }
        Command::ImportParquet { file, table } => {
            client.import_parquet(file, table)?;
            imported(file, table, out)
        }
    }
}

fn print<W: Write>(result: &ResultTable, format: OutputFormat, out: &mut W) -> Result<()> {
    OutputFormatter::new(format).write(result, out)?;
    Ok(())
}

fn export_csv<W: Write>(client: &DuckDbClient, query: &str, path: &Path, out: &mut W) -> Result<()> {
    let rows = client.export_to_csv(query, path)?;
    writeln!(out, "Successfully exported {rows} rows to: {}", path.display())?;
    Ok(())
}

fn export_parquet<W: Write>(
    client: &DuckDbClient,
    query: &str,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    client.export_to_parquet(query, path)?;
    writeln!(out, "Successfully exported to: {}", path.display())?;
    Ok(())
}

fn imported<W: Write>(file: &Path, table: &str, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Successfully imported {} to table '{table}'",
        file.display()
    )?;
    Ok(())
}
