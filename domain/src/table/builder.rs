//! Sparse table assembly for dynamic enrichment columns

use super::cell::CellValue;
use super::outcome::RowOutcome;
use super::row::{Row, Table};

/// Builds the enriched table as a sparse union-of-keys structure.
///
/// Enrichment attributes are provider-supplied and not known in advance:
/// later rows may introduce columns earlier rows lack. The builder registers
/// columns lazily in first-seen order and pads absent cells with `Null` when
/// the table is finished, so sparse semantics are explicit rather than an
/// artifact of fill-with-default behavior.
#[derive(Debug)]
pub struct TableBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl TableBuilder {
    /// Start a builder with a fixed set of base columns.
    ///
    /// Duplicate names collapse onto one column, so re-enriching an already
    /// enriched table overwrites its cells instead of doubling headers.
    pub fn new(base_columns: impl IntoIterator<Item = String>) -> Self {
        let mut builder = Self {
            columns: Vec::new(),
            rows: Vec::new(),
        };
        for column in base_columns {
            builder.ensure_column(&column);
        }
        builder
    }

    /// Register a column, returning its index.
    ///
    /// Unknown columns are appended in first-seen order.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.columns.iter().position(|c| c == name) {
            return index;
        }
        self.columns.push(name.to_string());
        self.columns.len() - 1
    }

    /// Append a row from (column, value) pairs.
    ///
    /// Cells for columns the row does not mention stay `Null`; pairs naming
    /// new columns extend the column set.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = (String, CellValue)>) {
        let mut values = vec![CellValue::Null; self.columns.len()];
        for (name, value) in cells {
            let index = self.ensure_column(&name);
            if index >= values.len() {
                values.resize(index + 1, CellValue::Null);
            }
            values[index] = value;
        }
        self.rows.push(values);
    }

    /// Columns registered so far, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The cells of the most recently pushed row, rendered as strings and
    /// aligned to the current column set. Used by the streaming sink.
    pub fn last_row_values(&self) -> Option<Vec<String>> {
        self.rows.last().map(|values| {
            (0..self.columns.len())
                .map(|i| values.get(i).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
    }

    /// Finish the build: pad every row to the final width and produce a
    /// rectangular [`Table`].
    pub fn finish(self) -> Table {
        let columns = self.columns;
        let rows = self
            .rows
            .into_iter()
            .map(|mut values| {
                values.resize(columns.len(), CellValue::Null);
                Row::new(columns.iter().cloned().zip(values).collect())
            })
            .collect();
        // Rows are padded to the column list by construction.
        Table::new(columns, rows).expect("builder produces rectangular tables")
    }
}

/// The final product of table enrichment (Entity)
///
/// Wraps the assembled table together with the per-row outcomes, which are
/// also present in the table's `ai_decision` column. Row order and count
/// match the input table.
#[derive(Debug, Clone)]
pub struct EnrichedTable {
    table: Table,
    outcomes: Vec<RowOutcome>,
}

impl EnrichedTable {
    pub fn new(table: Table, outcomes: Vec<RowOutcome>) -> Self {
        debug_assert_eq!(table.row_count(), outcomes.len());
        Self { table, outcomes }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn outcomes(&self) -> &[RowOutcome] {
        &self.outcomes
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Count rows per outcome: (valid, invalid, error).
    pub fn outcome_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for outcome in &self.outcomes {
            match outcome {
                RowOutcome::Valid => counts.0 += 1,
                RowOutcome::Invalid => counts.1 += 1,
                RowOutcome::Error => counts.2 += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_union_is_sparse() {
        let mut builder = TableBuilder::new(["name".to_string()]);
        builder.push_row(vec![
            ("name".to_string(), CellValue::text("Ada")),
            ("x".to_string(), CellValue::text("1")),
            ("y".to_string(), CellValue::text("2")),
        ]);
        builder.push_row(vec![
            ("name".to_string(), CellValue::text("Grace")),
            ("y".to_string(), CellValue::text("3")),
            ("z".to_string(), CellValue::text("4")),
        ]);

        let table = builder.finish();
        assert_eq!(table.columns(), ["name", "x", "y", "z"]);

        // Row 0 never produced z; row 1 never produced x.
        assert!(table.rows()[0].get("z").unwrap().is_null());
        assert!(table.rows()[1].get("x").unwrap().is_null());
        assert_eq!(table.rows()[1].get("y"), Some(&CellValue::text("3")));
    }

    #[test]
    fn test_duplicate_base_columns_collapse() {
        let mut builder = TableBuilder::new(["id".to_string(), "id".to_string()]);
        assert_eq!(builder.columns(), ["id"]);
        builder.push_row(vec![
            ("id".to_string(), CellValue::Integer(1)),
            ("id".to_string(), CellValue::Integer(2)),
        ]);
        let table = builder.finish();
        // The later pair wins the shared cell.
        assert_eq!(table.rows()[0].get("id"), Some(&CellValue::Integer(2)));
    }

    #[test]
    fn test_push_row_overwrites_nothing_across_rows() {
        let mut builder = TableBuilder::new(["id".to_string()]);
        builder.push_row(vec![("id".to_string(), CellValue::Integer(1))]);
        builder.push_row(vec![("id".to_string(), CellValue::Integer(2))]);
        let table = builder.finish();
        assert_eq!(table.rows()[0].get("id"), Some(&CellValue::Integer(1)));
        assert_eq!(table.rows()[1].get("id"), Some(&CellValue::Integer(2)));
    }

    #[test]
    fn test_last_row_values_aligned_to_columns() {
        let mut builder = TableBuilder::new(["name".to_string()]);
        builder.push_row(vec![
            ("name".to_string(), CellValue::text("Ada")),
            ("country".to_string(), CellValue::text("UK")),
        ]);
        assert_eq!(
            builder.last_row_values().unwrap(),
            vec!["Ada".to_string(), "UK".to_string()]
        );
    }

    #[test]
    fn test_outcome_counts() {
        let mut builder = TableBuilder::new(["n".to_string()]);
        builder.push_row(vec![("n".to_string(), CellValue::Integer(1))]);
        builder.push_row(vec![("n".to_string(), CellValue::Integer(2))]);
        builder.push_row(vec![("n".to_string(), CellValue::Integer(3))]);
        let enriched = EnrichedTable::new(
            builder.finish(),
            vec![RowOutcome::Valid, RowOutcome::Invalid, RowOutcome::Error],
        );
        assert_eq!(enriched.outcome_counts(), (1, 1, 1));
    }
}
