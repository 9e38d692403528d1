//! Model selection section

use duet_domain::Model;
use serde::{Deserialize, Serialize};

/// `[model]` section: which model drives both roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier, e.g. "gpt-4" or any custom id the endpoint accepts.
    pub name: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
        }
    }
}

impl FileModelConfig {
    pub fn parse(&self) -> Model {
        // Model parsing is infallible: unknown names become Custom.
        self.name.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(FileModelConfig::default().parse(), Model::Gpt4);
    }

    #[test]
    fn test_custom_model() {
        let config = FileModelConfig {
            name: "local-mixtral".to_string(),
        };
        assert_eq!(config.parse(), Model::Custom("local-mixtral".to_string()));
    }
}
