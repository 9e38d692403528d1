//! Application layer for duet
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod roles;
pub mod use_cases;

// Re-export commonly used types
pub use config::EnrichmentParams;
pub use ports::{
    conversation_logger::{
        CompositeConversationLogger, ConversationEvent, ConversationLogger, EventKind,
        NoConversationLogger,
    },
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    row_sink::{RowSink, SinkError},
};
pub use roles::{Executor, Planner};
pub use use_cases::enrich_row::{EnrichRowUseCase, RowEnrichment};
pub use use_cases::enrich_table::{EnrichTableError, EnrichTableUseCase};
