//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod enrichment;
mod model;
mod output;
mod provider;

pub use enrichment::FileEnrichmentConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection
    pub model: FileModelConfig,
    /// Provider endpoint settings
    pub provider: FileProviderConfig,
    /// Retry budget and completion tunables
    pub enrichment: FileEnrichmentConfig,
    /// Optional output paths
    pub output: FileOutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [model]
            name = "gpt-4o"

            [enrichment]
            max_retries = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.model.name, "gpt-4o");
        assert_eq!(config.enrichment.max_retries, 5);
        // Untouched sections keep their defaults.
        assert_eq!(config.provider, FileProviderConfig::default());
        assert_eq!(config.enrichment.executor_max_tokens, 2000);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
