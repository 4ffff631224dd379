//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Case Coach domain.

mod difficulty;
mod errors;
mod ids;
mod score;
mod session_status;
mod timestamp;

pub use difficulty::Difficulty;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CaseTemplateId, MessageId, SessionId, UserId};
pub use score::Score;
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
