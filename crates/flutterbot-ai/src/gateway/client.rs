//! Gateway client struct, request building, and response parsing.

use std::time::Duration;

use flutterbot_common::{Message, Origin};
use serde::{Deserialize, Serialize};

use crate::GatewayError;

use super::config::GatewayConfig;

/// Longest slice of an error body kept in `GatewayError::Http`.
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) messages: Vec<WireMessage<'a>>,
    pub(crate) temperature: f64,
    pub(crate) max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMessage<'a> {
    pub(crate) role: &'static str,
    pub(crate) content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat-completion client.
pub struct ChatCompletionClient {
    pub(crate) config: GatewayConfig,
    pub(crate) http: reqwest::Client,
}

impl ChatCompletionClient {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the request body: system instruction, then the context window
    /// in its original order, then the new user text.
    pub(crate) fn build_request<'a>(
        &'a self,
        context_window: &'a [Message],
        new_user_text: &'a str,
    ) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(context_window.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: &self.config.system_prompt,
        });
        for msg in context_window {
            let role = match msg.origin() {
                Origin::User => "user",
                Origin::Bot => "assistant",
            };
            messages.push(WireMessage {
                role,
                content: msg.text(),
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: new_user_text,
        });

        ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Extract the trimmed text of the first choice from a 200 body.
    pub(crate) fn parse_response(body: &str) -> Result<String, GatewayError> {
        let parsed: ChatResponse = serde_json::from_str(body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::MalformedResponse("empty choices".to_string()))?;

        first
            .message
            .content
            .map(|text| text.trim().to_string())
            .ok_or_else(|| GatewayError::MalformedResponse("choice has no content".to_string()))
    }

    pub(crate) fn http_error(status: u16, body: &str) -> GatewayError {
        GatewayError::Http {
            status,
            body: body.chars().take(ERROR_BODY_LIMIT).collect(),
        }
    }
}
