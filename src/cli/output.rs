//! Console rendering for query results.

use std::io::Write;

use clap::ValueEnum;
use comfy_table::presets::{
    ASCII_FULL, ASCII_FULL_CONDENSED, ASCII_HORIZONTAL_ONLY, ASCII_MARKDOWN, NOTHING,
};
use comfy_table::{Cell, Table};

use crate::client::ResultTable;

/// Printed instead of a table when a query returns no rows.
pub const NO_RESULTS: &str = "No results.";

/// Supported console table styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered table with a header separator (default)
    #[default]
    Psql,
    /// Bordered table with a line between every row
    Grid,
    /// Horizontal rules only
    Simple,
    /// No borders at all
    Plain,
    /// Markdown pipe table
    Markdown,
}

impl OutputFormat {
    fn preset(self) -> &'static str {
        match self {
            OutputFormat::Psql => ASCII_FULL_CONDENSED,
            OutputFormat::Grid => ASCII_FULL,
            OutputFormat::Simple => ASCII_HORIZONTAL_ONLY,
            OutputFormat::Plain => NOTHING,
            OutputFormat::Markdown => ASCII_MARKDOWN,
        }
    }
}

/// Formats result tables for the terminal.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the specified style.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render `result` followed by a row count, or the no-results notice.
    pub fn write<W: Write>(&self, result: &ResultTable, writer: &mut W) -> std::io::Result<()> {
        if result.is_empty() {
            return writeln!(writer, "{NO_RESULTS}");
        }

        writeln!(writer, "{}", self.build_table(result))?;
        writeln!(writer)?;
        writeln!(writer, "({} rows)", result.num_rows())
    }

    fn build_table(&self, result: &ResultTable) -> Table {
        let mut table = Table::new();
        table.load_preset(self.format.preset());

        table.set_header(result.column_names().into_iter().map(Cell::new));
        for row in result.rows() {
            table.add_row(row);
        }

        table
    }
}
