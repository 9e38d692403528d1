//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use duet_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// These are the transport/provider faults of the completion capability.
/// They are a separate channel from the `Failed` enrichment-result marker:
/// a gateway error is an exception the retry loop counts and remembers,
/// while a parse failure is an ordinary rejected attempt.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One completion request: role-tagged messages plus sampling controls
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    /// Ask the provider for a JSON-shaped response.
    pub json_mode: bool,
    pub max_tokens: u32,
    /// Sampling temperature; `None` leaves the provider default.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            json_mode: false,
            max_tokens: 1000,
            temperature: None,
        }
    }

    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the completion
/// capability. Implementations (adapters) live in the infrastructure layer.
/// The call blocks until the provider answers or fails; there is no
/// mid-request cancellation.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a completion request and return the raw response text.
    ///
    /// The response carries no well-formedness contract; callers own parsing.
    async fn complete(
        &self,
        model: &Model,
        request: CompletionRequest,
    ) -> Result<String, GatewayError>;
}
