mod message;

pub use message::*;
