//! Async turn execution for ConversationSession.

use std::sync::Arc;

use tracing::{debug, error};

use crate::GatewayError;

use super::manager::ConversationSession;
use super::types::{PendingTurn, TurnOutcome};

impl ConversationSession {
    /// Run one full turn: record the user message, ask the gateway for a
    /// reply using the context window, record the reply or its surrogate.
    ///
    /// Blank input is ignored. The typing flag is always cleared before
    /// this returns, whatever the gateway did.
    pub async fn submit(&mut self, raw_text: &str) -> TurnOutcome {
        match self.begin_turn(raw_text) {
            Some(turn) => self.complete_turn(turn).await,
            None => TurnOutcome::Ignored,
        }
    }

    /// Await the gateway for a turn started with `begin_turn`.
    ///
    /// The gateway call runs on its own task. If it panics the turn still
    /// finishes, with the malformed-response surrogate.
    pub async fn complete_turn(&mut self, turn: PendingTurn) -> TurnOutcome {
        if !self.config.typing_delay.is_zero() {
            tokio::time::sleep(self.config.typing_delay).await;
        }

        let gateway = Arc::clone(&self.gateway);
        let PendingTurn { text, window } = turn;
        let call = tokio::spawn(async move { gateway.complete(&window, &text).await });
        let result = call.await.unwrap_or_else(|e| {
            error!("Completion task failed: {e}");
            Err(GatewayError::MalformedResponse(format!(
                "completion task failed: {e}"
            )))
        });
        let outcome = self.finish_turn(result);
        debug!(?outcome, history = self.state.history.len(), "Turn finished");
        outcome
    }
}
