//! Conversation session management.
//!
//! A `ConversationSession` owns the append-only message log and the typing
//! flag, computes the bounded context window for each turn, and turns every
//! gateway failure into a visible bot reply.

mod chat;
mod handle;
mod manager;
mod types;


pub use handle::SessionHandle;
pub use manager::ConversationSession;
pub use types::{
    ConversationState, PendingTurn, SessionConfig, SessionError, SurrogateReplies, TurnOutcome,
};
