//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Enrichment command is empty")]
    EmptyCommand,

    #[error("Malformed table: {0}")]
    MalformedTable(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}
