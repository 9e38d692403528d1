//! Streaming row sink port
//!
//! Lets a consumer observe fully-processed rows before the whole table
//! finishes. The sink is append-only: a header is written once up front and
//! each subsequent record is one resolved row, in processing order. Earlier
//! records are never rewritten, so rows processed after a new enrichment
//! column appears may carry more values than the header names.

use thiserror::Error;

/// Errors from a row sink.
///
/// Sink failures are environmental, not per-attempt enrichment failures:
/// they propagate out of table enrichment instead of folding into a row's
/// outcome.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink rejected record: {0}")]
    Rejected(String),
}

/// Append-only sink for fully-resolved rows.
pub trait RowSink: Send + Sync {
    /// Write the header record. Called exactly once, before any row.
    fn write_header(&self, columns: &[String]) -> Result<(), SinkError>;

    /// Append one fully-resolved row, aligned to the columns known at the
    /// time of the call.
    fn append_row(&self, values: &[String]) -> Result<(), SinkError>;
}
