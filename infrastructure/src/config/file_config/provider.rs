//! Provider endpoint section

use serde::{Deserialize, Serialize};

/// `[provider]` section: where and how to reach the completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// API key override; falls back to the environment when absent.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            timeout_secs: 120,
        }
    }
}
