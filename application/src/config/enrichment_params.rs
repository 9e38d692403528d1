//! Enrichment parameters — retry and sampling control.
//!
//! [`EnrichmentParams`] groups the static parameters that control the
//! per-row retry loop and the two completion requests. These are
//! application-layer tunables, not domain policy.

use serde::{Deserialize, Serialize};

/// Retry and completion control parameters.
///
/// `max_retries` is the fixed attempt budget per row (≥ 1; `1` means a
/// single attempt with no retry). Token budgets and the executor sampling
/// temperature are tunables, not contracts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentParams {
    /// Maximum attempts per row before forced termination.
    pub max_retries: usize,
    /// Token budget for the Executor's completion.
    pub executor_max_tokens: u32,
    /// Sampling temperature for the Executor (creativity/consistency tradeoff).
    pub executor_temperature: f32,
    /// Token budget for the validation completion.
    pub validation_max_tokens: u32,
}

impl Default for EnrichmentParams {
    fn default() -> Self {
        Self {
            max_retries: 3,
            executor_max_tokens: 2000,
            executor_temperature: 0.7,
            validation_max_tokens: 1000,
        }
    }
}

impl EnrichmentParams {
    // ==================== Builder Methods ====================

    pub fn with_max_retries(mut self, max: usize) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_executor_max_tokens(mut self, max_tokens: u32) -> Self {
        self.executor_max_tokens = max_tokens;
        self
    }

    pub fn with_executor_temperature(mut self, temperature: f32) -> Self {
        self.executor_temperature = temperature;
        self
    }

    pub fn with_validation_max_tokens(mut self, max_tokens: u32) -> Self {
        self.validation_max_tokens = max_tokens;
        self
    }
}
