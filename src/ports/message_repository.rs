//! Message repository port.
//!
//! Messages are append-only: once written they are never updated or
//! deleted, so the contract has no update operation.

use crate::domain::conversation::Message;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for session message persistence.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message to its session's history.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn append(&self, message: &Message) -> Result<(), DomainError>;

    /// Full message history for a session, ordered by timestamp ascending.
    ///
    /// Returns an empty vector for an unknown session.
    async fn history(&self, session_id: &SessionId) -> Result<Vec<Message>, DomainError>;
}
