//! Session aggregate entity.
//!
//! Sessions are one practice run through a case template. Each session
//! belongs to one user and references exactly one template.
//!
//! # Invariants
//!
//! - `status` transitions Active -> Completed or Active -> Abandoned only
//! - `score` moves from unset to set exactly once, at completion; the
//!   engine never recomputes it afterward
//! - terminal sessions accept no further messages

use crate::domain::foundation::{
    CaseTemplateId, DomainError, ErrorCode, Score, SessionId, SessionStatus, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

/// Maximum length for session feedback text.
pub const MAX_FEEDBACK_LENGTH: usize = 2000;

/// Session aggregate - one practice run through a case template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// User who owns this session.
    user_id: UserId,

    /// The case template this session practices.
    case_template_id: CaseTemplateId,

    /// Current lifecycle status.
    status: SessionStatus,

    /// When the session was started.
    started_at: Timestamp,

    /// When the session reached a terminal state, if it has.
    completed_at: Option<Timestamp>,

    /// Feedback text written at completion.
    feedback: Option<String>,

    /// Final score assigned at completion.
    score: Option<Score>,
}

impl Session {
    /// Starts a new active session for a user and case template.
    pub fn start(id: SessionId, user_id: UserId, case_template_id: CaseTemplateId) -> Self {
        Self {
            id,
            user_id,
            case_template_id,
            status: SessionStatus::Active,
            started_at: Timestamp::now(),
            completed_at: None,
            feedback: None,
            score: None,
        }
    }

    /// Reconstitutes a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        user_id: UserId,
        case_template_id: CaseTemplateId,
        status: SessionStatus,
        started_at: Timestamp,
        completed_at: Option<Timestamp>,
        feedback: Option<String>,
        score: Option<Score>,
    ) -> Self {
        Self {
            id,
            user_id,
            case_template_id,
            status,
            started_at,
            completed_at,
            feedback,
            score,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the case template this session references.
    pub fn case_template_id(&self) -> &CaseTemplateId {
        &self.case_template_id
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns when the session was started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when the session reached a terminal state.
    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Returns the completion feedback, if set.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Returns the final score, if set.
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this session.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can access this session.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not authorized to access this session",
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates that the session can still accept messages.
    ///
    /// # Errors
    ///
    /// - `SessionNotActive` if the session is in a terminal state
    pub fn ensure_active(&self) -> Result<(), DomainError> {
        if self.status.is_active() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SessionNotActive,
                format!("Session is {} and cannot accept messages", self.status),
            ))
        }
    }

    /// Completes the session with its final score and feedback.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is not active
    /// - `ScoreAlreadySet` if a score was already recorded
    /// - `ValidationFailed` if feedback exceeds the length limit
    pub fn complete_with_results(
        &mut self,
        score: Score,
        feedback: impl Into<String>,
    ) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&SessionStatus::Completed) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot complete a {} session", self.status),
            ));
        }
        if self.score.is_some() {
            return Err(DomainError::new(
                ErrorCode::ScoreAlreadySet,
                "Session score has already been recorded",
            ));
        }
        let feedback = feedback.into();
        if feedback.len() > MAX_FEEDBACK_LENGTH {
            return Err(DomainError::validation(
                "feedback",
                format!("Feedback cannot exceed {} characters", MAX_FEEDBACK_LENGTH),
            ));
        }

        self.status = SessionStatus::Completed;
        self.completed_at = Some(Timestamp::now());
        self.score = Some(score);
        self.feedback = Some(feedback);
        Ok(())
    }

    /// Abandons the session.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is not active
    pub fn abandon(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&SessionStatus::Abandoned) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot abandon a {} session", self.status),
            ));
        }

        self.status = SessionStatus::Abandoned;
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }
}
