//! Tabular file adapters: CSV reading/writing and the streaming row sink

pub mod csv;
pub mod sink;

pub use csv::{TableIoError, read_csv, read_csv_str, write_csv};
pub use sink::CsvRowSink;
