//! Shareable session handle that runs turns as background tasks.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::manager::ConversationSession;
use super::types::{ConversationState, SessionError, TurnOutcome};

/// Cloneable handle to a session for event-driven callers.
///
/// `submit` enters the typing state before it returns and finishes the turn
/// on a Tokio task. Only one turn runs at a time; a submit while a turn is
/// in flight is rejected with [`SessionError::Busy`].
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<ConversationSession>>,
}

impl SessionHandle {
    pub fn new(session: ConversationSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Start a turn. Must be called from within a Tokio runtime.
    ///
    /// The session stays locked until the returned task completes, so the
    /// history append and context-window read of two turns never interleave.
    pub fn submit(&self, raw_text: &str) -> Result<JoinHandle<TurnOutcome>, SessionError> {
        let mut session = Arc::clone(&self.inner)
            .try_lock_owned()
            .map_err(|_| SessionError::Busy)?;
        let turn = session
            .begin_turn(raw_text)
            .ok_or(SessionError::EmptyInput)?;

        Ok(tokio::spawn(async move { session.complete_turn(turn).await }))
    }

    /// Current state, or `None` while a turn is in flight.
    pub fn snapshot(&self) -> Option<ConversationState> {
        self.inner.try_lock().ok().map(|session| session.snapshot())
    }

    /// Wait for any in-flight turn, then return the state.
    pub async fn settled(&self) -> ConversationState {
        self.inner.lock().await.snapshot()
    }

    pub fn is_busy(&self) -> bool {
        self.inner.try_lock().is_err()
    }
}
