//! Executor role: produce candidate enrichment values for one task.

use crate::config::EnrichmentParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use duet_domain::{EnrichmentResult, EnrichmentTask, Model, extract_object};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// The producing half of the enrichment duo.
///
/// Holds only read-only configuration; `produce` is pure with respect to row
/// data. Transport faults propagate as [`GatewayError`] so the retry loop can
/// count them; unparseable output is returned as the `Failed` result value.
pub struct Executor {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    max_tokens: u32,
    temperature: f32,
}

impl Executor {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model, params: &EnrichmentParams) -> Self {
        Self {
            gateway,
            model,
            max_tokens: params.executor_max_tokens,
            temperature: params.executor_temperature,
        }
    }

    /// Run one enrichment task to a structured result.
    ///
    /// The completion is requested JSON-shaped; a well-formed object parses
    /// directly, anything else goes through best-effort extraction, and only
    /// when both fail does the attempt resolve to the failure marker.
    pub async fn produce(&self, task: &EnrichmentTask) -> Result<EnrichmentResult, GatewayError> {
        let request = CompletionRequest::new(task.messages().to_vec())
            .with_json_mode()
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = self.gateway.complete(&self.model, request).await?;

        if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&response) {
            debug!("Executor response parsed directly as JSON object");
            return Ok(EnrichmentResult::from_json_object(&object));
        }

        match extract_object(&response) {
            Some(object) => {
                debug!("Executor response recovered via JSON extraction");
                Ok(EnrichmentResult::from_json_object(&object))
            }
            None => Ok(EnrichmentResult::failed(
                "Failed to parse a JSON object from the model response",
            )),
        }
    }
}
