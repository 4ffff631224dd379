//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `case_template` - Scenario definitions that sessions are based on
//! - `session` - Practice session lifecycle
//! - `conversation` - Messages and conversation stage classification
//! - `coaching` - Response generation, progress assessment, scoring, feedback

pub mod case_template;
pub mod coaching;
pub mod conversation;
pub mod foundation;
pub mod session;
