//! Command handlers.
//!
//! Each handler owns one use case: it authorizes, drives the aggregates,
//! and persists through the ports. Handlers are the only place where
//! sessions, messages, and the coaching engine meet.

mod abandon_session;
mod start_session;
mod submit_message;

pub use abandon_session::{AbandonSessionCommand, AbandonSessionError, AbandonSessionHandler};
pub use start_session::{
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
};
pub use submit_message::{
    SubmitMessageCommand, SubmitMessageError, SubmitMessageHandler, SubmitMessageResult,
};
