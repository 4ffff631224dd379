//! Message entity for coaching sessions.
//!
//! Messages are append-only records of the turns in a session. The system
//! role carries only the initial instructional message, which the coaching
//! engine excludes from stage and progress calculations.

use crate::domain::foundation::{DomainError, MessageId, SessionId, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum length for message content.
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Role of a message sender in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Initial instructional message (excluded from coaching calculations).
    System,
    /// The practicing user.
    User,
    /// The coach.
    Assistant,
}

impl Role {
    /// Returns true if messages with this role count toward stage and
    /// progress calculations.
    pub fn counts_for_coaching(&self) -> bool {
        matches!(self, Self::User | Self::Assistant)
    }
}

/// Coach-produced metadata attached to assistant messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMetadata {
    /// The coach's reasoning trace for this turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,

    /// Suggested next moves for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl MessageMetadata {
    /// Returns true if no metadata is present.
    pub fn is_empty(&self) -> bool {
        self.thinking.is_none() && self.suggestions.is_none()
    }
}

/// An immutable message within a session.
///
/// # Invariants
///
/// - `content` is non-empty and at most 2000 characters
/// - `timestamp` is set at construction and never changes
/// - messages within a session are ordered by timestamp ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The session this message belongs to.
    session_id: SessionId,

    /// The role of the sender.
    role: Role,

    /// The content of the message.
    content: String,

    /// When the message was created.
    timestamp: Timestamp,

    /// Optional coach metadata (assistant messages).
    #[serde(default, skip_serializing_if = "MessageMetadata::is_empty")]
    metadata: MessageMetadata,
}

impl Message {
    /// Creates a new message with the given role and content.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty or exceeds 2000 characters
    pub fn new(
        session_id: SessionId,
        role: Role,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into().trim().to_string();
        Self::validate_content(&content)?;

        Ok(Self {
            id: MessageId::new(),
            session_id,
            role,
            content,
            timestamp: Timestamp::now(),
            metadata: MessageMetadata::default(),
        })
    }

    /// Creates a user message.
    pub fn user(session_id: SessionId, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(session_id, Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(
        session_id: SessionId,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(session_id, Role::Assistant, content)
    }

    /// Creates a system message.
    pub fn system(session_id: SessionId, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(session_id, Role::System, content)
    }

    /// Attaches coach metadata to this message.
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Reconstitutes a message from persistence (no validation).
    pub fn reconstitute(
        id: MessageId,
        session_id: SessionId,
        role: Role,
        content: String,
        timestamp: Timestamp,
        metadata: MessageMetadata,
    ) -> Self {
        Self {
            id,
            session_id,
            role,
            content,
            timestamp,
            metadata,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the session this message belongs to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was created.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns the coach metadata.
    pub fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    /// Returns true if this message is from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns true if this message is from the coach.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }

    /// Returns true if this is the system instruction message.
    pub fn is_system(&self) -> bool {
        self.role == Role::System
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_content(content: &str) -> Result<(), DomainError> {
        if content.is_empty() {
            return Err(DomainError::validation(
                "content",
                "Message content cannot be empty",
            ));
        }
        if content.len() > MAX_CONTENT_LENGTH {
            return Err(DomainError::validation(
                "content",
                format!("Message cannot exceed {} characters", MAX_CONTENT_LENGTH),
            ));
        }
        Ok(())
    }
}
