//! CSV export for materialized query results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::client::ResultTable;

/// Writes result tables to files.
pub struct Exporter;

impl Exporter {
    /// Write `table` as CSV to `path`, truncating any existing file.
    ///
    /// Returns the number of data rows written. The header row is written
    /// even when the table is empty.
    pub fn write_csv<P: AsRef<Path>>(path: P, table: &ResultTable) -> std::io::Result<usize> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        let rows = Self::write_csv_to(&mut writer, table)?;

        writer.flush()?;
        Ok(rows)
    }

    /// Write `table` as CSV to any writer.
    pub fn write_csv_to<W: Write>(writer: &mut W, table: &ResultTable) -> std::io::Result<usize> {
        let headers: Vec<String> = table.column_names().into_iter().map(escape).collect();
        writeln!(writer, "{}", headers.join(","))?;

        let mut rows = 0;
        for row in table.rows() {
            let values: Vec<String> = row.iter().map(|v| escape(v)).collect();
            writeln!(writer, "{}", values.join(","))?;
            rows += 1;
        }

        Ok(rows)
    }
}

/// Quote a field if it contains a delimiter, quote, or line break.
fn escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
