//! Session state, configuration, and turn result types.

use std::time::Duration;

use flutterbot_common::{defaults, Message};

use crate::GatewayErrorKind;

/// Read-only view of a conversation: history plus typing flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    pub(super) history: Vec<Message>,
    pub(super) is_typing: bool,
}

impl ConversationState {
    pub(super) fn seeded(greeting: &str) -> Self {
        Self {
            history: vec![Message::bot(greeting)],
            is_typing: false,
        }
    }

    /// Messages in display order.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn last(&self) -> Option<&Message> {
        self.history.last()
    }
}

/// Bot replies appended when a turn fails, one per error kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurrogateReplies {
    pub missing_credential: String,
    pub http_error: String,
    pub network_error: String,
    pub malformed_response: String,
}

impl Default for SurrogateReplies {
    fn default() -> Self {
        Self {
            missing_credential: defaults::with_api_key_env(
                defaults::MISSING_CREDENTIAL_REPLY,
                defaults::API_KEY_ENV,
            ),
            http_error: defaults::HTTP_ERROR_REPLY.to_string(),
            network_error: defaults::NETWORK_ERROR_REPLY.to_string(),
            malformed_response: defaults::MALFORMED_RESPONSE_REPLY.to_string(),
        }
    }
}

impl SurrogateReplies {
    pub fn for_kind(&self, kind: GatewayErrorKind) -> &str {
        match kind {
            GatewayErrorKind::MissingCredential => &self.missing_credential,
            GatewayErrorKind::Http => &self.http_error,
            GatewayErrorKind::Network => &self.network_error,
            GatewayErrorKind::MalformedResponse => &self.malformed_response,
        }
    }
}

/// Session behaviour.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of prior messages sent along with each prompt.
    pub history_window: usize,
    pub greeting: String,
    /// Pause between showing the typing state and calling the gateway.
    pub typing_delay: Duration,
    pub replies: SurrogateReplies,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_window: defaults::HISTORY_WINDOW as usize,
            greeting: defaults::GREETING.to_string(),
            typing_delay: Duration::ZERO,
            replies: SurrogateReplies::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_history_window(mut self, n: usize) -> Self {
        self.history_window = n;
        self
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn with_replies(mut self, replies: SurrogateReplies) -> Self {
        self.replies = replies;
        self
    }
}

/// A turn whose user message is recorded and whose reply is outstanding.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub(super) text: String,
    pub(super) window: Vec<Message>,
}

impl PendingTurn {
    /// Trimmed user text sent to the gateway.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Prior messages sent as context, oldest first.
    pub fn context_window(&self) -> &[Message] {
        &self.window
    }
}

/// How a call to `submit` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input; nothing was recorded.
    Ignored,
    /// The model's reply was appended.
    Replied,
    /// The surrogate for this error kind was appended.
    Failed(GatewayErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("message is empty")]
    EmptyInput,
    #[error("session is busy with another turn")]
    Busy,
}
