//! Enrich Row use case
//!
//! The per-row retry state machine: formulate task, invoke the Executor,
//! validate through the Planner, commit or retry within a fixed budget.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, EventKind};
use crate::roles::{Executor, Planner};
use duet_domain::{Row, RowOutcome};
use tracing::debug;

/// Result of one row's full attempt sequence.
///
/// `cells` holds every enrichment field any attempt produced, with a later
/// attempt's value superseding an earlier attempt's value for the same
/// attribute — rejected attempts included, per the commit-before-validate
/// contract.
#[derive(Debug, Clone)]
pub struct RowEnrichment {
    /// Merged enrichment fields, in first-seen attribute order.
    pub cells: Vec<(String, String)>,
    /// Terminal classification for the row.
    pub outcome: RowOutcome,
    /// Final diagnostic: the last verdict rationale or transport error text.
    pub message: String,
    /// Number of attempts actually made (1 ≤ attempts ≤ max_retries).
    pub attempts: usize,
}

/// Use case driving one row through the retry loop.
///
/// The loop makes at most `max_retries` attempts with immediate re-attempt —
/// no backoff, no jitter. All per-attempt failures are absorbed here; nothing
/// escapes to the table level as an exception.
pub struct EnrichRowUseCase {
    planner: Planner,
    executor: Executor,
    max_retries: usize,
}

impl EnrichRowUseCase {
    /// Create the use case. `max_retries` below 1 is clamped to 1: one
    /// attempt, no retry.
    pub fn new(planner: Planner, executor: Executor, max_retries: usize) -> Self {
        Self {
            planner,
            executor,
            max_retries: max_retries.max(1),
        }
    }

    /// Run the retry loop for one row.
    ///
    /// `row_number` is the 1-indexed position used in trace messages.
    pub async fn execute(
        &self,
        row_number: usize,
        row: &Row,
        logger: &dyn ConversationLogger,
    ) -> RowEnrichment {
        let mut retry_count = 0usize;
        let mut success = false;
        let mut had_error = false;
        let mut cells: Vec<(String, String)> = Vec::new();
        let mut outcome = RowOutcome::Invalid;
        let mut message = String::new();

        while !success && retry_count < self.max_retries {
            if retry_count > 0 {
                logger.log(ConversationEvent::new(
                    EventKind::System,
                    format!(
                        "Retry {}/{} for row {}",
                        retry_count, self.max_retries, row_number
                    ),
                ));
            }

            logger.log(ConversationEvent::new(
                EventKind::Planner,
                format!("Analyzing row {} and building context", row_number),
            ));
            let context = self.planner.build_context(row);

            logger.log(ConversationEvent::new(
                EventKind::Planner,
                "Formulating task for the Executor",
            ));
            let task = self.planner.formulate_task(&context);

            logger.log(ConversationEvent::new(EventKind::Executor, "Processing task"));
            let result = match self.executor.produce(&task).await {
                Ok(result) => result,
                Err(e) => {
                    // Transport fault: count it, remember it, move to the
                    // next attempt. No columns are merged for this attempt.
                    logger.log(ConversationEvent::new(
                        EventKind::Error,
                        format!("Error processing row {}: {}", row_number, e),
                    ));
                    had_error = true;
                    message = e.to_string();
                    retry_count += 1;
                    if retry_count >= self.max_retries {
                        logger.log(ConversationEvent::new(
                            EventKind::Error,
                            format!(
                                "All processing attempts failed with errors for row {}",
                                row_number
                            ),
                        ));
                    }
                    continue;
                }
            };

            logger.log(ConversationEvent::new(
                EventKind::Executor,
                format!("Generated enrichment data: {}", result.to_json()),
            ));

            // Commit point: merge before validation is known, so a later
            // rejection does not erase this attempt's columns but a later
            // attempt overwrites them.
            if let Some(fields) = result.fields() {
                merge_fields(&mut cells, fields);
            }

            logger.log(ConversationEvent::new(
                EventKind::Planner,
                "Validating the Executor's response",
            ));
            let verdict = self.planner.validate(&result, &context).await;

            if verdict.accepted {
                logger.log(ConversationEvent::new(
                    EventKind::PlannerValidation,
                    format!("Validation successful: {}", verdict.rationale),
                ));
                outcome = RowOutcome::Valid;
                message = verdict.rationale;
                success = true;
                // Accepted: stop immediately, even with budget remaining.
                break;
            }

            logger.log(ConversationEvent::new(
                EventKind::PlannerValidation,
                format!("Validation failed: {}", verdict.rationale),
            ));
            message = verdict.rationale;
            retry_count += 1;
            if retry_count >= self.max_retries {
                logger.log(ConversationEvent::new(
                    EventKind::PlannerValidation,
                    format!("All validation attempts failed for row {}", row_number),
                ));
            }
        }

        let attempts = if success { retry_count + 1 } else { retry_count };

        if !success {
            // Error dominates invalid: any exception during the row's
            // attempts forces the error classification.
            outcome = RowOutcome::from_exhausted(had_error);
            let status = match outcome {
                RowOutcome::Error => format!(
                    "Row {}: final status 'error' - processing exceptions prevented completion",
                    row_number
                ),
                _ => format!(
                    "Row {}: final status 'invalid' - validation criteria not met after {} attempts",
                    row_number, self.max_retries
                ),
            };
            logger.log(ConversationEvent::new(EventKind::System, status));
        }

        debug!(
            row = row_number,
            outcome = %outcome,
            attempts,
            "Row enrichment finished"
        );

        RowEnrichment {
            cells,
            outcome,
            message,
            attempts,
        }
    }
}

/// Upsert fields into the accumulated cells, preserving first-seen order.
fn merge_fields(cells: &mut Vec<(String, String)>, fields: &[(String, String)]) {
    for (name, value) in fields {
        match cells.iter_mut().find(|(existing, _)| existing == name) {
            Some(cell) => cell.1 = value.clone(),
            None => cells.push((name.clone(), value.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnrichmentParams;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
    use async_trait::async_trait;
    use duet_domain::{ACCEPT_TOKEN, CellValue, Command, Model, REJECT_TOKEN};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Gateway that replays a fixed script of responses across all calls
    /// (executor and validation alike, in causal order).
    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn complete(
            &self,
            _model: &Model,
            _request: CompletionRequest,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::Other("script exhausted".into())))
        }
    }

    fn use_case(gateway: Arc<ScriptedGateway>, max_retries: usize) -> EnrichRowUseCase {
        let params = EnrichmentParams::default().with_max_retries(max_retries);
        let planner = Planner::new(
            Arc::clone(&gateway) as Arc<dyn LlmGateway>,
            Model::default(),
            Command::new("add a country field"),
            &params,
        );
        let executor = Executor::new(gateway, Model::default(), &params);
        EnrichRowUseCase::new(planner, executor, params.max_retries)
    }

    fn row() -> Row {
        Row::new(vec![("name".to_string(), CellValue::text("Ada"))])
    }

    fn accept() -> Result<String, GatewayError> {
        Ok(format!("{ACCEPT_TOKEN} - plausible"))
    }

    fn reject() -> Result<String, GatewayError> {
        Ok(format!("{REJECT_TOKEN} - implausible"))
    }

    #[tokio::test]
    async fn test_first_attempt_accept_costs_two_calls() {
        let gateway = ScriptedGateway::new(vec![Ok(r#"{"country": "UK"}"#.into()), accept()]);
        let result = use_case(Arc::clone(&gateway), 3)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        assert_eq!(result.outcome, RowOutcome::Valid);
        assert_eq!(result.attempts, 1);
        // Exactly one Executor call and one validation call.
        assert_eq!(gateway.call_count(), 2);
        assert_eq!(
            result.cells,
            vec![("country".to_string(), "UK".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejections_exhaust_to_invalid() {
        let gateway = ScriptedGateway::new(vec![
            Ok(r#"{"country": "UK"}"#.into()),
            reject(),
            Ok(r#"{"country": "France"}"#.into()),
            reject(),
            Ok(r#"{"country": "Spain"}"#.into()),
            reject(),
        ]);
        let result = use_case(Arc::clone(&gateway), 3)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        assert_eq!(result.outcome, RowOutcome::Invalid);
        assert_eq!(result.attempts, 3);
        // The last attempt's columns survive even though the row is invalid.
        assert_eq!(
            result.cells,
            vec![("country".to_string(), "Spain".to_string())]
        );
    }

    #[tokio::test]
    async fn test_error_dominates_later_clean_rejection() {
        let gateway = ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Ok(r#"{"country": "UK"}"#.into()),
            reject(),
        ]);
        let result = use_case(gateway, 2)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        // The second attempt was a clean rejection, but the earlier
        // exception forces the error classification.
        assert_eq!(result.outcome, RowOutcome::Error);
    }

    #[tokio::test]
    async fn test_success_after_transport_error_is_valid() {
        let gateway = ScriptedGateway::new(vec![
            Err(GatewayError::ConnectionError("down".into())),
            Ok(r#"{"country": "UK"}"#.into()),
            accept(),
        ]);
        let result = use_case(gateway, 3)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        // Error dominance applies only when the row never succeeds.
        assert_eq!(result.outcome, RowOutcome::Valid);
        assert_eq!(result.attempts, 2);
    }

    #[tokio::test]
    async fn test_max_retries_one_means_single_attempt() {
        let gateway = ScriptedGateway::new(vec![
            Ok(r#"{"country": "UK"}"#.into()),
            reject(),
            // Never reached.
            Ok(r#"{"country": "France"}"#.into()),
            accept(),
        ]);
        let result = use_case(Arc::clone(&gateway), 1)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        assert_eq!(result.outcome, RowOutcome::Invalid);
        assert_eq!(result.attempts, 1);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_later_attempt_supersedes_earlier_fields() {
        let gateway = ScriptedGateway::new(vec![
            Ok(r#"{"country": "UK", "gender": "female"}"#.into()),
            reject(),
            Ok(r#"{"country": "France"}"#.into()),
            accept(),
        ]);
        let result = use_case(gateway, 3)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        assert_eq!(result.outcome, RowOutcome::Valid);
        // country overwritten by the accepted attempt, gender kept from the
        // rejected one.
        assert_eq!(
            result.cells,
            vec![
                ("country".to_string(), "France".to_string()),
                ("gender".to_string(), "female".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_unparseable_output_counts_as_invalid_not_error() {
        let gateway = ScriptedGateway::new(vec![
            Ok("no json at all".into()),
            Ok("still no json".into()),
        ]);
        let result = use_case(Arc::clone(&gateway), 2)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        assert_eq!(result.outcome, RowOutcome::Invalid);
        assert!(result.cells.is_empty());
        // Structural rejection spends no validation completion.
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_transport_error_merges_no_columns() {
        let gateway = ScriptedGateway::new(vec![Err(GatewayError::Timeout)]);
        let result = use_case(gateway, 1)
            .execute(1, &row(), &NoConversationLogger)
            .await;

        assert_eq!(result.outcome, RowOutcome::Error);
        assert!(result.cells.is_empty());
    }

    #[test]
    fn test_merge_fields_upserts_in_order() {
        let mut cells = vec![("a".to_string(), "1".to_string())];
        merge_fields(
            &mut cells,
            &[
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "3".to_string()),
            ],
        );
        assert_eq!(
            cells,
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }
}
