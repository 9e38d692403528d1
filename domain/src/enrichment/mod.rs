//! Enrichment results, tasks, verdicts and JSON recovery

pub mod extract;
pub mod result;
pub mod task;
pub mod verdict;

pub use extract::extract_object;
pub use result::EnrichmentResult;
pub use task::{EnrichmentTask, RowContext};
pub use verdict::{ACCEPT_TOKEN, REJECT_TOKEN, ValidationVerdict, parse_verdict_response};
