//! Wire types for the OpenAI-compatible chat completions protocol.
//!
//! These structs mirror the JSON bodies exactly; conversion from domain
//! messages happens here so the gateway stays thin.

use duet_application::CompletionRequest;
use duet_domain::{Message, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WireMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

impl ChatCompletionBody {
    pub fn build(model: &str, request: &CompletionRequest) -> Self {
        Self {
            model: model.to_string(),
            messages: request.messages.iter().map(WireMessage::from).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: WireMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
}
