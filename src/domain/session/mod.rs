//! Session module.
//!
//! A session is one user's practice run through a case template, with a
//! lifecycle of active -> completed/abandoned.

mod aggregate;

pub use aggregate::{Session, MAX_FEEDBACK_LENGTH};
