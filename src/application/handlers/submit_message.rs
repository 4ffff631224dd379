//! SubmitMessage command handler.
//!
//! Records the user's message, runs the coaching engine over the session
//! history, records the coach's reply, and completes the session when the
//! conversation reaches its conclusion.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::coaching::{CoachingEngine, TemplateSelector};
use crate::domain::conversation::{Message, MessageMetadata};
use crate::domain::foundation::{CaseTemplateId, DomainError, SessionId, UserId};
use crate::domain::session::Session;
use crate::ports::{CaseTemplateReader, MessageRepository, SessionRepository};

/// Command to submit a user message to a session.
#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    /// The user sending the message.
    pub user_id: UserId,
    /// The session the message belongs to.
    pub session_id: SessionId,
    /// The message content.
    pub content: String,
}

impl SubmitMessageCommand {
    /// Creates a new submit message command.
    pub fn new(user_id: UserId, session_id: SessionId, content: impl Into<String>) -> Self {
        Self {
            user_id,
            session_id,
            content: content.into(),
        }
    }
}

/// Errors that can occur when submitting a message.
#[derive(Debug, Error)]
pub enum SubmitMessageError {
    /// The session does not exist.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The user does not own the session.
    #[error("Forbidden: user does not own this session")]
    Forbidden,

    /// The session has already completed or been abandoned.
    #[error("Session is not active")]
    SessionNotActive,

    /// The session references a template that no longer exists.
    #[error("Case template not found: {0}")]
    TemplateNotFound(CaseTemplateId),

    /// Domain error.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of submitting a message.
#[derive(Debug, Clone)]
pub struct SubmitMessageResult {
    /// The session after this turn (completed if the turn concluded it).
    pub session: Session,
    /// The stored user message.
    pub user_message: Message,
    /// The coach's reply, with thinking and suggestions attached.
    pub assistant_message: Message,
}

impl SubmitMessageResult {
    /// Returns true if this turn completed the session.
    pub fn completed_session(&self) -> bool {
        self.session.status().is_terminal()
    }
}

/// Handler for SubmitMessage commands.
///
/// Turns for the same session must not run concurrently; the engine
/// classifies the stage from the history snapshot it is handed.
pub struct SubmitMessageHandler<S: TemplateSelector> {
    sessions: Arc<dyn SessionRepository>,
    messages: Arc<dyn MessageRepository>,
    templates: Arc<dyn CaseTemplateReader>,
    engine: CoachingEngine<S>,
}

impl<S: TemplateSelector> SubmitMessageHandler<S> {
    /// Creates a new handler with the given dependencies.
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        messages: Arc<dyn MessageRepository>,
        templates: Arc<dyn CaseTemplateReader>,
        engine: CoachingEngine<S>,
    ) -> Self {
        Self {
            sessions,
            messages,
            templates,
            engine,
        }
    }

    /// Handles a submit message command.
    pub async fn handle(
        &self,
        cmd: SubmitMessageCommand,
    ) -> Result<SubmitMessageResult, SubmitMessageError> {
        // 1. Load the session and check access
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SubmitMessageError::SessionNotFound(cmd.session_id))?;
        session
            .authorize(&cmd.user_id)
            .map_err(|_| SubmitMessageError::Forbidden)?;
        session
            .ensure_active()
            .map_err(|_| SubmitMessageError::SessionNotActive)?;

        // 2. Resolve the template the session practices
        let template = self
            .templates
            .find_by_id(session.case_template_id())
            .await?
            .ok_or_else(|| SubmitMessageError::TemplateNotFound(*session.case_template_id()))?;

        // 3. Run the engine over the history snapshot
        let history = self.messages.history(&cmd.session_id).await?;
        let output = self.engine.respond(&template, &history, &cmd.content)?;

        // 4. Persist both sides of the turn
        let user_message = Message::user(cmd.session_id, cmd.content)?;
        self.messages.append(&user_message).await?;

        let assistant_message = Message::assistant(cmd.session_id, output.content.clone())?
            .with_metadata(MessageMetadata {
                thinking: output.thinking.clone(),
                suggestions: output.suggestions.clone(),
            });
        self.messages.append(&assistant_message).await?;

        // 5. Close out the session if the conversation concluded
        if let Some(score) = output.score {
            let feedback = output.feedback.clone().unwrap_or_default();
            session.complete_with_results(score, feedback)?;
            self.sessions.update(&session).await?;
            info!(session_id = %session.id(), score = score.value(), "session completed");
        }

        Ok(SubmitMessageResult {
            session,
            user_message,
            assistant_message,
        })
    }
}
