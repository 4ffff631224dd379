//! In-memory adapters.
//!
//! Useful for testing and development. Each adapter is cheaply cloneable
//! and shares its state across clones.

mod case_template_store;
mod message_store;
mod session_store;

pub use case_template_store::InMemoryCaseTemplateStore;
pub use message_store::InMemoryMessageStore;
pub use session_store::InMemorySessionStore;
