//! CompletionGateway trait implementation for ChatCompletionClient.

use std::time::Duration;

use async_trait::async_trait;
use flutterbot_common::Message;
use tracing::debug;

use crate::{CompletionGateway, GatewayError};

use super::client::ChatCompletionClient;

fn network_error(e: reqwest::Error, timeout: Duration) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Network(format!("request timed out after {timeout:?}"))
    } else {
        GatewayError::Network(e.to_string())
    }
}

#[async_trait]
impl CompletionGateway for ChatCompletionClient {
    async fn complete(
        &self,
        context_window: &[Message],
        new_user_text: &str,
    ) -> Result<String, GatewayError> {
        let Some(credential) = self.config.credential() else {
            return Err(GatewayError::MissingCredential);
        };

        let body = self.build_request(context_window, new_user_text);
        let timeout = self.config.timeout;

        debug!(
            model = %self.config.model,
            context = context_window.len(),
            "Chat completion request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(credential)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| network_error(e, timeout))?;

        // The server answered, so a non-200 is an HTTP error even when its
        // body cannot be read in full.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::http_error(status.as_u16(), &text));
        }

        let text = response
            .text()
            .await
            .map_err(|e| network_error(e, timeout))?;
        Self::parse_response(&text)
    }
}
