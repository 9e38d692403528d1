//! Planner role: build context, formulate tasks, judge results.

use crate::config::EnrichmentParams;
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use duet_domain::{
    Command, EnrichmentPromptTemplate, EnrichmentResult, EnrichmentTask, Message, Model, Row,
    RowContext, ValidationVerdict, parse_verdict_response,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// The planning and validating half of the enrichment duo.
///
/// All three operations are read-only with respect to row state. Validation
/// never raises: any gateway fault during the judgment call is converted
/// into a rejection carrying the error text.
pub struct Planner {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    command: Command,
    validation_max_tokens: u32,
}

impl Planner {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        model: Model,
        command: Command,
        params: &EnrichmentParams,
    ) -> Self {
        Self {
            gateway,
            model,
            command,
            validation_max_tokens: params.validation_max_tokens,
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Wrap a row into its enrichment context.
    ///
    /// A pass-through today; the seam where external lookups would join the
    /// row's data, kept separate from task formulation on purpose.
    pub fn build_context(&self, row: &Row) -> RowContext {
        RowContext::new(row.clone())
    }

    /// Build the Executor's task from a row context.
    pub fn formulate_task(&self, context: &RowContext) -> EnrichmentTask {
        let row_json = pretty(&context.row().to_json());
        let messages = vec![
            Message::system(EnrichmentPromptTemplate::executor_system()),
            Message::user(EnrichmentPromptTemplate::executor_task(
                &row_json,
                self.command.content(),
                self.command.requests_evidence(),
            )),
        ];
        EnrichmentTask::new(messages, context.clone())
    }

    /// Judge one enrichment result against its originating row.
    ///
    /// The failure marker and the empty mapping are rejected structurally,
    /// without spending a completion.
    pub async fn validate(
        &self,
        result: &EnrichmentResult,
        context: &RowContext,
    ) -> ValidationVerdict {
        match result {
            EnrichmentResult::Failed(reason) => {
                return ValidationVerdict::reject(format!("Executor reported a failure: {reason}"));
            }
            EnrichmentResult::Fields(fields) if fields.is_empty() => {
                return ValidationVerdict::reject("Enrichment result is empty");
            }
            EnrichmentResult::Fields(_) => {}
        }

        let row_json = pretty(&context.row().to_json());
        let result_json = pretty(&result.to_json());
        let messages = vec![
            Message::system(EnrichmentPromptTemplate::validation_system()),
            Message::user(EnrichmentPromptTemplate::validation_request(
                &row_json,
                self.command.content(),
                &result_json,
            )),
        ];
        let request =
            CompletionRequest::new(messages).with_max_tokens(self.validation_max_tokens);

        match self.gateway.complete(&self.model, request).await {
            Ok(response) => {
                debug!("Validation response received ({} bytes)", response.len());
                parse_verdict_response(&response)
            }
            Err(e) => {
                warn!("Validation call failed, rejecting attempt: {}", e);
                ValidationVerdict::reject(format!("Validation error: {e}"))
            }
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
