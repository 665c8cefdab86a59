//! Conversation engine for FlutterBot.
//!
//! Provides:
//! - [`CompletionGateway`]: the seam to a remote chat-completion service,
//!   with an OpenAI-compatible HTTP implementation ([`ChatCompletionClient`])
//! - [`ConversationSession`]: the append-only message log, typing state and
//!   per-turn orchestration with bounded context windows
//! - [`SessionHandle`]: a shareable handle that runs turns as Tokio tasks

pub mod gateway;
pub mod session;

use async_trait::async_trait;
use flutterbot_common::Message;

pub use gateway::{ChatCompletionClient, GatewayConfig};
pub use session::{
    ConversationSession, ConversationState, PendingTurn, SessionConfig, SessionError,
    SessionHandle, SurrogateReplies, TurnOutcome,
};

/// Sends one user prompt, plus prior context, to a completion service.
///
/// Implementations hold their own configuration and must not keep
/// per-call state.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// `new_user_text` must be non-empty after trimming. `context_window`
    /// holds the prior messages to send, oldest first.
    async fn complete(
        &self,
        context_window: &[Message],
        new_user_text: &str,
    ) -> Result<String, GatewayError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("API credential is not configured")]
    MissingCredential,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Fieldless discriminant of [`GatewayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayErrorKind {
    MissingCredential,
    Http,
    Network,
    MalformedResponse,
}

impl GatewayError {
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            GatewayError::MissingCredential => GatewayErrorKind::MissingCredential,
            GatewayError::Http { .. } => GatewayErrorKind::Http,
            GatewayError::Network(_) => GatewayErrorKind::Network,
            GatewayError::MalformedResponse(_) => GatewayErrorKind::MalformedResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(
            GatewayError::MissingCredential.kind(),
            GatewayErrorKind::MissingCredential
        );
        let http = GatewayError::Http {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(http.kind(), GatewayErrorKind::Http);
        assert_eq!(
            GatewayError::Network("refused".into()).kind(),
            GatewayErrorKind::Network
        );
        assert_eq!(
            GatewayError::MalformedResponse("no choices".into()).kind(),
            GatewayErrorKind::MalformedResponse
        );
    }

    #[test]
    fn error_display() {
        let err = GatewayError::Http {
            status: 401,
            body: "invalid api key".into(),
        };
        assert_eq!(err.to_string(), "HTTP 401: invalid api key");
        assert_eq!(
            GatewayError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
