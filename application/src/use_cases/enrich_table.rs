//! Enrich Table use case
//!
//! Orchestrates the full table enrichment flow: one row at a time, in
//! original order, each through the Row use case's retry loop.

use crate::config::EnrichmentParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, EventKind, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::row_sink::{RowSink, SinkError};
use crate::roles::{Executor, Planner};
use crate::use_cases::enrich_row::EnrichRowUseCase;
use duet_domain::{
    AI_DECISION_COLUMN, CellValue, Command, EnrichedTable, Model, Table, TableBuilder,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can escape table enrichment.
///
/// Per-attempt LLM failures never appear here — they are absorbed into row
/// outcomes. What remains are boundary faults detected before any row starts
/// and environmental sink failures.
#[derive(Error, Debug)]
pub enum EnrichTableError {
    #[error("Row sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Use case for enriching a whole table through the Planner/Executor duo.
///
/// Rows are processed strictly sequentially; no row is skipped because of a
/// prior row's outcome, and the full table is returned only after every row
/// has reached a terminal classification.
pub struct EnrichTableUseCase {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    params: EnrichmentParams,
}

impl EnrichTableUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model, params: EnrichmentParams) -> Self {
        Self {
            gateway,
            model,
            params,
        }
    }

    /// Execute with no observers and no streaming sink.
    pub async fn execute(
        &self,
        table: &Table,
        command: &Command,
    ) -> Result<EnrichedTable, EnrichTableError> {
        self.execute_with_observers(table, command, &NoProgress, &NoConversationLogger, None)
            .await
    }

    /// Execute with progress/log observers and an optional streaming sink.
    pub async fn execute_with_observers(
        &self,
        table: &Table,
        command: &Command,
        progress: &dyn ProgressNotifier,
        logger: &dyn ConversationLogger,
        sink: Option<&dyn RowSink>,
    ) -> Result<EnrichedTable, EnrichTableError> {
        let total = table.row_count();
        info!("Starting enrichment of {} rows", total);

        logger.log(ConversationEvent::new(
            EventKind::System,
            format!("Starting to process {} rows", total),
        ));
        logger.log(ConversationEvent::new(
            EventKind::System,
            format!("User command: {}", command),
        ));

        logger.log(ConversationEvent::new(
            EventKind::System,
            "Initializing Planner with user command",
        ));
        let planner = Planner::new(
            Arc::clone(&self.gateway),
            self.model.clone(),
            command.clone(),
            &self.params,
        );
        let executor = Executor::new(Arc::clone(&self.gateway), self.model.clone(), &self.params);
        let row_use_case = EnrichRowUseCase::new(planner, executor, self.params.max_retries);

        // Base columns: the originals plus the outcome column; enrichment
        // columns join lazily as rows produce them.
        let mut builder = TableBuilder::new(
            table
                .columns()
                .iter()
                .cloned()
                .chain([AI_DECISION_COLUMN.to_string()]),
        );

        if let Some(sink) = sink {
            logger.log(ConversationEvent::new(
                EventKind::System,
                "Streaming results to the row sink",
            ));
            sink.write_header(builder.columns())?;
        }

        let mut outcomes = Vec::with_capacity(total);

        for (index, row) in table.rows().iter().enumerate() {
            let current = index + 1;
            progress.on_row_start(current, total);

            logger.log(ConversationEvent::new(
                EventKind::System,
                format!("Processing row {}/{}", current, total),
            ));

            let enrichment = row_use_case.execute(current, row, logger).await;

            let cells = row
                .fields()
                .iter()
                .cloned()
                .chain([(
                    AI_DECISION_COLUMN.to_string(),
                    CellValue::text(enrichment.outcome.as_str()),
                )])
                .chain(
                    enrichment
                        .cells
                        .into_iter()
                        .map(|(name, value)| (name, CellValue::Text(value))),
                );
            builder.push_row(cells);
            outcomes.push(enrichment.outcome);

            if let Some(sink) = sink {
                if let Some(values) = builder.last_row_values() {
                    sink.append_row(&values)?;
                }
                logger.log(ConversationEvent::new(
                    EventKind::System,
                    format!("Row {} written to the row sink", current),
                ));
            }
        }

        logger.log(ConversationEvent::new(
            EventKind::System,
            format!("Processing complete. Enriched {} rows.", total),
        ));
        progress.on_table_complete(total);
        info!("Enrichment finished for {} rows", total);

        Ok(EnrichedTable::new(builder.finish(), outcomes))
    }
}
