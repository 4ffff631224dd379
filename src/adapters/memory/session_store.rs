//! In-memory session repository adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserId};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// In-memory store for session aggregates.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored sessions (useful for tests).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        let mut owned: Vec<Session> = sessions
            .values()
            .filter(|s| s.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.started_at().as_datetime().cmp(a.started_at().as_datetime()));
        Ok(owned)
    }

    async fn count_active_by_user(&self, user_id: &UserId) -> Result<u32, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .filter(|s| s.is_owner(user_id) && s.status().is_active())
            .count() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CaseTemplateId;

    fn session_for(user: &str) -> Session {
        Session::start(
            SessionId::new(),
            UserId::new(user).unwrap(),
            CaseTemplateId::new(),
        )
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let store = InMemorySessionStore::new();
        let session = session_for("user-1");
        store.save(&session).await.unwrap();

        let found = store.find_by_id(session.id()).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn update_requires_existing_session() {
        let store = InMemorySessionStore::new();
        let session = session_for("user-1");

        let err = store.update(&session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn count_active_excludes_terminal_and_other_users() {
        let store = InMemorySessionStore::new();
        let user = UserId::new("user-1").unwrap();

        store.save(&session_for("user-1")).await.unwrap();
        store.save(&session_for("user-2")).await.unwrap();

        let mut abandoned = session_for("user-1");
        store.save(&abandoned).await.unwrap();
        abandoned.abandon().unwrap();
        store.update(&abandoned).await.unwrap();

        assert_eq!(store.count_active_by_user(&user).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_by_user_returns_only_owned_sessions() {
        let store = InMemorySessionStore::new();
        store.save(&session_for("user-1")).await.unwrap();
        store.save(&session_for("user-1")).await.unwrap();
        store.save(&session_for("user-2")).await.unwrap();

        let owned = store
            .find_by_user_id(&UserId::new("user-1").unwrap())
            .await
            .unwrap();
        assert_eq!(owned.len(), 2);
    }
}
