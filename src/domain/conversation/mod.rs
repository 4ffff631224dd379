//! Conversation module.
//!
//! Messages are the append-only turns of a coaching session; the stage
//! classifier maps how far along a conversation is from its message count.

mod message;
mod stage;

pub use message::{Message, MessageMetadata, Role, MAX_CONTENT_LENGTH};
pub use stage::Stage;
