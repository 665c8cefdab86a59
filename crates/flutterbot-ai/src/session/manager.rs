//! ConversationSession struct and synchronous turn bookkeeping.

use std::sync::Arc;

use flutterbot_common::{Event, EventBus, Message};
use tracing::{debug, warn};

use crate::{CompletionGateway, GatewayError};

use super::types::{ConversationState, PendingTurn, SessionConfig, TurnOutcome};

/// A single user's conversation with the completion gateway.
pub struct ConversationSession {
    /// History and typing flag.
    pub(super) state: ConversationState,
    pub(super) gateway: Arc<dyn CompletionGateway>,
    pub(super) config: SessionConfig,
    /// Where appends and typing transitions are announced, if anywhere.
    pub(super) events: Option<Arc<EventBus>>,
}

impl ConversationSession {
    /// Start a session seeded with the configured greeting.
    pub fn new(gateway: Arc<dyn CompletionGateway>, config: SessionConfig) -> Self {
        Self {
            state: ConversationState::seeded(&config.greeting),
            gateway,
            config,
            events: None,
        }
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    /// Record the user message and enter the typing state.
    ///
    /// Returns `None` without touching state when `raw_text` is blank.
    /// The context window is taken before the new message is appended, so
    /// it never contains the message it accompanies.
    pub fn begin_turn(&mut self, raw_text: &str) -> Option<PendingTurn> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let window = self.context_window();
        self.append(Message::user(text));
        self.set_typing(true);

        debug!(
            context = window.len(),
            history = self.state.history.len(),
            "Turn started"
        );

        Some(PendingTurn {
            text: text.to_string(),
            window,
        })
    }

    /// Append the reply (or its surrogate) and leave the typing state.
    pub fn finish_turn(&mut self, result: Result<String, GatewayError>) -> TurnOutcome {
        let outcome = match result {
            Ok(reply) => {
                self.append(Message::bot(reply));
                TurnOutcome::Replied
            }
            Err(e) => {
                warn!(error = %e, "Completion failed, replying with surrogate");
                let kind = e.kind();
                let text = self.config.replies.for_kind(kind).to_string();
                self.append(Message::bot(text));
                TurnOutcome::Failed(kind)
            }
        };
        self.set_typing(false);
        outcome
    }

    /// The last `history_window` messages, oldest first.
    pub(crate) fn context_window(&self) -> Vec<Message> {
        let history = &self.state.history;
        let start = history.len().saturating_sub(self.config.history_window);
        history[start..].to_vec()
    }

    fn append(&mut self, message: Message) {
        self.state.history.push(message.clone());
        self.publish(Event::MessageAppended(message));
    }

    fn set_typing(&mut self, typing: bool) {
        self.state.is_typing = typing;
        self.publish(Event::TypingChanged(typing));
    }

    fn publish(&self, event: Event) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Owned copy of the current state for a renderer.
    pub fn snapshot(&self) -> ConversationState {
        self.state.clone()
    }

    pub fn history(&self) -> &[Message] {
        self.state.history()
    }

    pub fn is_typing(&self) -> bool {
        self.state.is_typing()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
