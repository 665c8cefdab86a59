pub mod defaults;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, FlutterbotError};
pub use events::{Event, EventBus};
pub use id::{new_id, MessageId};
pub use types::{Message, Origin};

pub type Result<T> = std::result::Result<T, FlutterbotError>;
