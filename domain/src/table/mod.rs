//! Tabular data: cells, rows, outcomes and sparse assembly

pub mod builder;
pub mod cell;
pub mod outcome;
pub mod row;

pub use builder::{EnrichedTable, TableBuilder};
pub use cell::CellValue;
pub use outcome::{AI_DECISION_COLUMN, RowOutcome};
pub use row::{Row, Table};
