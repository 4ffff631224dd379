//! StartSession command handler.
//!
//! Creates a new active session for a case template and seeds its history
//! with the template's system prompt and the coach's opening message.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::conversation::Message;
use crate::domain::foundation::{CaseTemplateId, DomainError, SessionId, UserId};
use crate::domain::session::Session;
use crate::ports::{CaseTemplateReader, MessageRepository, SessionRepository};

/// Command to start a new coaching session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    /// The user starting the session.
    pub user_id: UserId,
    /// The case template to practice.
    pub case_template_id: CaseTemplateId,
}

impl StartSessionCommand {
    /// Creates a new start session command.
    pub fn new(user_id: UserId, case_template_id: CaseTemplateId) -> Self {
        Self {
            user_id,
            case_template_id,
        }
    }
}

/// Errors that can occur when starting a session.
#[derive(Debug, Error)]
pub enum StartSessionError {
    /// The requested case template does not exist.
    #[error("Case template not found: {0}")]
    TemplateNotFound(CaseTemplateId),

    /// The case template has been deactivated.
    #[error("Case template is inactive: {0}")]
    TemplateInactive(CaseTemplateId),

    /// The user already has the maximum number of active sessions.
    #[error("Active session limit reached ({limit})")]
    SessionLimitReached { limit: u32 },

    /// Domain error.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of successfully starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    /// The newly created session.
    pub session: Session,
    /// The coach's opening message.
    pub initial_message: Message,
}

/// Handler for StartSession commands.
pub struct StartSessionHandler {
    templates: Arc<dyn CaseTemplateReader>,
    sessions: Arc<dyn SessionRepository>,
    messages: Arc<dyn MessageRepository>,
    max_active_sessions: u32,
}

impl StartSessionHandler {
    /// Creates a new handler with the given dependencies.
    pub fn new(
        templates: Arc<dyn CaseTemplateReader>,
        sessions: Arc<dyn SessionRepository>,
        messages: Arc<dyn MessageRepository>,
        max_active_sessions: u32,
    ) -> Self {
        Self {
            templates,
            sessions,
            messages,
            max_active_sessions,
        }
    }

    /// Handles a start session command.
    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, StartSessionError> {
        // 1. Resolve the template and check it is still offered
        let template = self
            .templates
            .find_by_id(&cmd.case_template_id)
            .await?
            .ok_or(StartSessionError::TemplateNotFound(cmd.case_template_id))?;
        if !template.is_active() {
            return Err(StartSessionError::TemplateInactive(cmd.case_template_id));
        }

        // 2. Enforce the per-user active session limit
        let active = self.sessions.count_active_by_user(&cmd.user_id).await?;
        if active >= self.max_active_sessions {
            return Err(StartSessionError::SessionLimitReached {
                limit: self.max_active_sessions,
            });
        }

        // 3. Create and persist the session
        let session = Session::start(SessionId::new(), cmd.user_id, cmd.case_template_id);
        self.sessions.save(&session).await?;

        // 4. Seed the history: system instructions, then the coach's opener
        let system = Message::system(*session.id(), template.system_prompt())?;
        self.messages.append(&system).await?;

        let initial_message = Message::assistant(*session.id(), template.initial_message())?;
        self.messages.append(&initial_message).await?;

        info!(session_id = %session.id(), template_id = %template.id(), "session started");

        Ok(StartSessionResult {
            session,
            initial_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCaseTemplateStore, InMemoryMessageStore, InMemorySessionStore,
    };
    use crate::domain::case_template::CaseTemplate;
    use crate::domain::foundation::Difficulty;

    struct Fixture {
        templates: Arc<InMemoryCaseTemplateStore>,
        sessions: Arc<InMemorySessionStore>,
        messages: Arc<InMemoryMessageStore>,
        handler: StartSessionHandler,
    }

    fn fixture(max_active_sessions: u32) -> Fixture {
        let templates = Arc::new(InMemoryCaseTemplateStore::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let messages = Arc::new(InMemoryMessageStore::new());
        let handler = StartSessionHandler::new(
            templates.clone(),
            sessions.clone(),
            messages.clone(),
            max_active_sessions,
        );
        Fixture {
            templates,
            sessions,
            messages,
            handler,
        }
    }

    fn template() -> CaseTemplate {
        CaseTemplate::new(
            CaseTemplateId::new(),
            "Profitability case",
            "A client with falling profits.",
            "Retail",
            Difficulty::Beginner,
            30,
            "You are a case interview coach.",
            "Welcome! Our client has seen profits fall for two years.",
            vec![],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn starts_session_and_seeds_history() {
        let fx = fixture(5);
        let t = template();
        let template_id = *t.id();
        fx.templates.insert(t).await;

        let result = fx
            .handler
            .handle(StartSessionCommand::new(
                UserId::new("user-1").unwrap(),
                template_id,
            ))
            .await
            .unwrap();

        assert!(result.session.status().is_active());
        assert!(result.initial_message.is_assistant());

        let history = fx.messages.history(result.session.id()).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_system());
        assert!(history[1].is_assistant());
        assert_eq!(
            history[1].content(),
            "Welcome! Our client has seen profits fall for two years."
        );

        let stored = fx.sessions.find_by_id(result.session.id()).await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn unknown_template_is_rejected() {
        let fx = fixture(5);
        let result = fx
            .handler
            .handle(StartSessionCommand::new(
                UserId::new("user-1").unwrap(),
                CaseTemplateId::new(),
            ))
            .await;
        assert!(matches!(result, Err(StartSessionError::TemplateNotFound(_))));
    }

    #[tokio::test]
    async fn inactive_template_is_rejected() {
        let fx = fixture(5);
        let mut t = template();
        t.deactivate();
        let template_id = *t.id();
        fx.templates.insert(t).await;

        let result = fx
            .handler
            .handle(StartSessionCommand::new(
                UserId::new("user-1").unwrap(),
                template_id,
            ))
            .await;
        assert!(matches!(result, Err(StartSessionError::TemplateInactive(_))));
    }

    #[tokio::test]
    async fn session_limit_is_enforced() {
        let fx = fixture(1);
        let t = template();
        let template_id = *t.id();
        fx.templates.insert(t).await;

        let user = UserId::new("user-1").unwrap();
        fx.handler
            .handle(StartSessionCommand::new(user.clone(), template_id))
            .await
            .unwrap();

        let result = fx
            .handler
            .handle(StartSessionCommand::new(user, template_id))
            .await;
        assert!(matches!(
            result,
            Err(StartSessionError::SessionLimitReached { limit: 1 })
        ));
    }

    #[tokio::test]
    async fn limit_counts_only_active_sessions() {
        let fx = fixture(1);
        let t = template();
        let template_id = *t.id();
        fx.templates.insert(t).await;

        let user = UserId::new("user-1").unwrap();
        let first = fx
            .handler
            .handle(StartSessionCommand::new(user.clone(), template_id))
            .await
            .unwrap();

        let mut session = first.session;
        session.abandon().unwrap();
        fx.sessions.update(&session).await.unwrap();

        let result = fx
            .handler
            .handle(StartSessionCommand::new(user, template_id))
            .await;
        assert!(result.is_ok());
    }
}
