//! Row and Table entities

use super::cell::CellValue;
use crate::core::error::DomainError;
use serde_json::{Map, Value};

/// One table row: an ordered mapping from column name to scalar value (Entity)
///
/// Rows are immutable inputs to enrichment. A row is identified by its
/// positional index in the owning [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new(fields: Vec<(String, CellValue)>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[(String, CellValue)] {
        &self.fields
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Render the row as a JSON object, preserving column order.
    ///
    /// This is the form the Planner embeds into prompts.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

/// An in-memory table: ordered columns and ordered rows (Entity)
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table, validating that every row matches the column list.
    ///
    /// A mismatched row is a programmer error at the boundary and fails fast
    /// before any enrichment starts.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self, DomainError> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DomainError::MalformedTable(format!(
                    "row {} has {} cells, expected {}",
                    index + 1,
                    row.len(),
                    columns.len()
                )));
            }
            for ((name, _), column) in row.fields().iter().zip(&columns) {
                if name != column {
                    return Err(DomainError::MalformedTable(format!(
                        "row {} column '{}' does not match header '{}'",
                        index + 1,
                        name,
                        column
                    )));
                }
            }
        }
        Ok(Self { columns, rows })
    }

    /// Build a table from bare rows, taking the column list from the first.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, DomainError> {
        let columns = rows
            .first()
            .map(|row| row.column_names().map(str::to_string).collect())
            .unwrap_or_default();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
