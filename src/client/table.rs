//! Materialized query results.

use duckdb::arrow::array::{Array, ArrayRef, RecordBatch};
use duckdb::arrow::datatypes::SchemaRef;
use duckdb::arrow::util::display::array_value_to_string;

/// A fully collected query result.
///
/// Column order and names are exactly those reported by the engine, and
/// rows keep the order the engine produced them in.
#[derive(Debug, Clone)]
pub struct ResultTable {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    num_rows: usize,
}

impl ResultTable {
    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        let num_rows = batches.iter().map(|b| b.num_rows()).sum();
        Self {
            schema,
            batches,
            num_rows,
        }
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Display string of one cell, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<String> {
        if col >= self.num_columns() {
            return None;
        }
        let mut offset = row;
        for batch in &self.batches {
            if offset < batch.num_rows() {
                return Some(format_value(batch.column(col), offset));
            }
            offset -= batch.num_rows();
        }
        None
    }

    /// Iterate rows as display strings, one `String` per column.
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.batches.iter().flat_map(|batch| {
            (0..batch.num_rows()).map(move |row_idx| {
                batch
                    .columns()
                    .iter()
                    .map(|col| format_value(col, row_idx))
                    .collect()
            })
        })
    }
}

/// Format a single cell value. NULL renders as an empty string.
fn format_value(col: &ArrayRef, row_idx: usize) -> String {
    if col.is_null(row_idx) {
        return String::new();
    }
    array_value_to_string(col, row_idx).unwrap_or_else(|_| "?".to_string())
}
