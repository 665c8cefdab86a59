use tokio::sync::broadcast;

use crate::types::Message;

/// Session lifecycle events consumed by the presentation layer.
#[derive(Debug, Clone)]
pub enum Event {
    MessageAppended(Message),
    TypingChanged(bool),
    Shutdown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
