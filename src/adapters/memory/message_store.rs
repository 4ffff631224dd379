//! In-memory message repository adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Message;
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::MessageRepository;

/// In-memory append-only store for session messages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    messages: Arc<RwLock<HashMap<SessionId, Vec<Message>>>>,
}

impl InMemoryMessageStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored messages (useful for tests).
    pub async fn clear(&self) {
        self.messages.write().await.clear();
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageStore {
    async fn append(&self, message: &Message) -> Result<(), DomainError> {
        let mut messages = self.messages.write().await;
        messages
            .entry(*message.session_id())
            .or_default()
            .push(message.clone());
        Ok(())
    }

    async fn history(&self, session_id: &SessionId) -> Result<Vec<Message>, DomainError> {
        let messages = self.messages.read().await;
        let mut history = messages.get(session_id).cloned().unwrap_or_default();
        history.sort_by(|a, b| a.timestamp().as_datetime().cmp(b.timestamp().as_datetime()));
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn history_is_empty_for_unknown_session() {
        let store = InMemoryMessageStore::new();
        let history = store.history(&SessionId::new()).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn append_preserves_conversation_order() {
        let store = InMemoryMessageStore::new();
        let session_id = SessionId::new();

        for content in ["one", "two", "three"] {
            let msg = Message::user(session_id, content).unwrap();
            store.append(&msg).await.unwrap();
        }

        let history = store.history(&session_id).await.unwrap();
        let contents: Vec<&str> = history.iter().map(Message::content).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn sessions_do_not_share_history() {
        let store = InMemoryMessageStore::new();
        let a = SessionId::new();
        let b = SessionId::new();

        store.append(&Message::user(a, "for a").unwrap()).await.unwrap();
        store.append(&Message::user(b, "for b").unwrap()).await.unwrap();

        assert_eq!(store.history(&a).await.unwrap().len(), 1);
        assert_eq!(store.history(&b).await.unwrap().len(), 1);
    }
}
