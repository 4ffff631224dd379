//! AbandonSession command handler.
//!
//! Lets a user walk away from an active session without a score. Abandoned
//! sessions are terminal: they keep their history but accept no further
//! messages.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// Command to abandon an active session.
#[derive(Debug, Clone)]
pub struct AbandonSessionCommand {
    /// The user abandoning the session.
    pub user_id: UserId,
    /// The session to abandon.
    pub session_id: SessionId,
}

impl AbandonSessionCommand {
    /// Creates a new abandon session command.
    pub fn new(user_id: UserId, session_id: SessionId) -> Self {
        Self {
            user_id,
            session_id,
        }
    }
}

/// Errors that can occur when abandoning a session.
#[derive(Debug, Error)]
pub enum AbandonSessionError {
    /// The session does not exist.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The user does not own the session.
    #[error("Forbidden: user does not own this session")]
    Forbidden,

    /// The session has already completed or been abandoned.
    #[error("Session is already in a terminal state")]
    AlreadyTerminal,

    /// Domain error.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for AbandonSession commands.
pub struct AbandonSessionHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl AbandonSessionHandler {
    /// Creates a new handler with the given dependencies.
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Handles an abandon session command.
    pub async fn handle(&self, cmd: AbandonSessionCommand) -> Result<Session, AbandonSessionError> {
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(AbandonSessionError::SessionNotFound(cmd.session_id))?;
        session
            .authorize(&cmd.user_id)
            .map_err(|_| AbandonSessionError::Forbidden)?;

        session
            .abandon()
            .map_err(|_| AbandonSessionError::AlreadyTerminal)?;
        self.sessions.update(&session).await?;

        info!(session_id = %session.id(), "session abandoned");

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::foundation::{CaseTemplateId, SessionStatus};

    fn handler(store: Arc<InMemorySessionStore>) -> AbandonSessionHandler {
        AbandonSessionHandler::new(store)
    }

    async fn stored_session(store: &InMemorySessionStore, user: &str) -> Session {
        let session = Session::start(
            SessionId::new(),
            UserId::new(user).unwrap(),
            CaseTemplateId::new(),
        );
        store.save(&session).await.unwrap();
        session
    }

    #[tokio::test]
    async fn owner_can_abandon_an_active_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = stored_session(&store, "user-1").await;

        let abandoned = handler(store.clone())
            .handle(AbandonSessionCommand::new(
                UserId::new("user-1").unwrap(),
                *session.id(),
            ))
            .await
            .unwrap();

        assert_eq!(abandoned.status(), SessionStatus::Abandoned);
        let stored = store.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Abandoned);
    }

    #[tokio::test]
    async fn non_owner_is_forbidden() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = stored_session(&store, "user-1").await;

        let result = handler(store)
            .handle(AbandonSessionCommand::new(
                UserId::new("user-2").unwrap(),
                *session.id(),
            ))
            .await;
        assert!(matches!(result, Err(AbandonSessionError::Forbidden)));
    }

    #[tokio::test]
    async fn terminal_sessions_cannot_be_abandoned_again() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = stored_session(&store, "user-1").await;
        session.abandon().unwrap();
        store.update(&session).await.unwrap();

        let result = handler(store)
            .handle(AbandonSessionCommand::new(
                UserId::new("user-1").unwrap(),
                *session.id(),
            ))
            .await;
        assert!(matches!(result, Err(AbandonSessionError::AlreadyTerminal)));
    }

    #[tokio::test]
    async fn unknown_session_is_rejected() {
        let store = Arc::new(InMemorySessionStore::new());
        let result = handler(store)
            .handle(AbandonSessionCommand::new(
                UserId::new("user-1").unwrap(),
                SessionId::new(),
            ))
            .await;
        assert!(matches!(
            result,
            Err(AbandonSessionError::SessionNotFound(_))
        ));
    }
}
