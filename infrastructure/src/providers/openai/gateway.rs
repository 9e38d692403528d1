//! OpenAI-compatible LLM gateway adapter
//!
//! Implements the [`LlmGateway`] port over the chat-completions HTTP
//! protocol. Any endpoint speaking that protocol works through the
//! configurable base URL; authentication is a bearer API key resolved at
//! construction so a missing key fails fast, before any row is processed.

use super::types::{ApiErrorBody, ChatCompletionBody, ChatCompletionResponse};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use duet_application::{CompletionRequest, GatewayError, LlmGateway};
use duet_domain::Model;
use std::time::Duration;
use tracing::debug;

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug)]
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiGateway {
    /// Create a gateway from provider configuration.
    ///
    /// The API key comes from the config override or `OPENAI_API_KEY`.
    pub fn new(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = match &config.api_key {
            Some(key) if !key.is_empty() => key.clone(),
            _ => std::env::var(API_KEY_ENV).map_err(|_| {
                GatewayError::AuthError(format!(
                    "No API key configured and {} is not set",
                    API_KEY_ENV
                ))
            })?,
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(
        &self,
        model: &Model,
        request: CompletionRequest,
    ) -> Result<String, GatewayError> {
        let body = ChatCompletionBody::build(model.as_str(), &request);

        debug!(
            model = %model,
            messages = request.messages.len(),
            json_mode = request.json_mode,
            "Calling chat completions endpoint"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(match status.as_u16() {
                401 | 403 => GatewayError::AuthError(detail),
                404 => GatewayError::ModelNotAvailable(detail),
                429 => GatewayError::RateLimited(detail),
                code => GatewayError::RequestFailed(format!("HTTP {code}: {detail}")),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Malformed response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::RequestFailed("Response contained no choices".into()))
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::Other(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = FileProviderConfig {
            api_key: None,
            ..FileProviderConfig::default()
        };
        // Shadow any ambient key for a deterministic result.
        if std::env::var(API_KEY_ENV).is_err() {
            let error = OpenAiGateway::new(&config).unwrap_err();
            assert!(matches!(error, GatewayError::AuthError(_)));
        }
    }

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let config = FileProviderConfig {
            base_url: "https://example.test/v1/".to_string(),
            api_key: Some("sk-test".to_string()),
            ..FileProviderConfig::default()
        };
        let gateway = OpenAiGateway::new(&config).unwrap();
        assert_eq!(gateway.endpoint(), "https://example.test/v1/chat/completions");
    }
}
