//! Enrichment loop section

use duet_application::EnrichmentParams;
use serde::{Deserialize, Serialize};

/// `[enrichment]` section: retry budget and completion tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEnrichmentConfig {
    /// Attempt budget per row (≥ 1).
    pub max_retries: usize,
    pub executor_max_tokens: u32,
    pub executor_temperature: f32,
    pub validation_max_tokens: u32,
}

impl Default for FileEnrichmentConfig {
    fn default() -> Self {
        let params = EnrichmentParams::default();
        Self {
            max_retries: params.max_retries,
            executor_max_tokens: params.executor_max_tokens,
            executor_temperature: params.executor_temperature,
            validation_max_tokens: params.validation_max_tokens,
        }
    }
}

impl FileEnrichmentConfig {
    pub fn to_params(&self) -> EnrichmentParams {
        EnrichmentParams::default()
            .with_max_retries(self.max_retries.max(1))
            .with_executor_max_tokens(self.executor_max_tokens)
            .with_executor_temperature(self.executor_temperature)
            .with_validation_max_tokens(self.validation_max_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let params = FileEnrichmentConfig::default().to_params();
        assert_eq!(params.max_retries, 3);
        assert_eq!(params.executor_max_tokens, 2000);
    }

    #[test]
    fn test_zero_retries_clamped() {
        let config = FileEnrichmentConfig {
            max_retries: 0,
            ..FileEnrichmentConfig::default()
        };
        assert_eq!(config.to_params().max_retries, 1);
    }
}
