//! Case template aggregate.
//!
//! Immutable per session: once a session starts, the engine treats the
//! template as a read-only descriptor. Administrators create, edit, and
//! deactivate templates through the external admin surface; the rules
//! enforced there live here.

use crate::domain::foundation::{CaseTemplateId, Difficulty, DomainError, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum length for template title.
pub const MAX_TITLE_LENGTH: usize = 100;
/// Maximum length for template description.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
/// Maximum length for industry name.
pub const MAX_INDUSTRY_LENGTH: usize = 50;
/// Estimated duration bounds in minutes.
pub const MIN_DURATION_MINUTES: u16 = 5;
pub const MAX_DURATION_MINUTES: u16 = 180;
/// System prompt length bounds.
pub const MIN_SYSTEM_PROMPT_LENGTH: usize = 10;
pub const MAX_SYSTEM_PROMPT_LENGTH: usize = 2000;
/// Initial message length bounds.
pub const MIN_INITIAL_MESSAGE_LENGTH: usize = 10;
pub const MAX_INITIAL_MESSAGE_LENGTH: usize = 1000;
/// Tag limits.
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LENGTH: usize = 30;

/// Case template aggregate - the scenario definition for practice sessions.
///
/// # Invariants
///
/// - `title` is 1-100 characters
/// - `description` is 1-1000 characters
/// - `industry` is 1-50 characters
/// - `estimated_duration` is 5-180 minutes
/// - `system_prompt` is 10-2000 characters
/// - `initial_message` is 10-1000 characters
/// - at most 10 tags, each 1-30 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTemplate {
    id: CaseTemplateId,
    title: String,
    description: String,
    industry: String,
    difficulty: Difficulty,
    estimated_duration: u16,
    system_prompt: String,
    initial_message: String,
    tags: Vec<String>,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Partial update for a case template (admin edit surface).
#[derive(Debug, Clone, Default)]
pub struct CaseTemplateUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub estimated_duration: Option<u16>,
    pub system_prompt: Option<String>,
    pub initial_message: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl CaseTemplate {
    /// Creates a new active case template.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any field violates the invariants above
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CaseTemplateId,
        title: impl Into<String>,
        description: impl Into<String>,
        industry: impl Into<String>,
        difficulty: Difficulty,
        estimated_duration: u16,
        system_prompt: impl Into<String>,
        initial_message: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into().trim().to_string();
        let description = description.into().trim().to_string();
        let industry = industry.into().trim().to_string();
        let system_prompt = system_prompt.into().trim().to_string();
        let initial_message = initial_message.into().trim().to_string();
        let tags: Vec<String> = tags.into_iter().map(|t| t.trim().to_string()).collect();

        Self::validate_text("title", &title, 1, MAX_TITLE_LENGTH)?;
        Self::validate_text("description", &description, 1, MAX_DESCRIPTION_LENGTH)?;
        Self::validate_text("industry", &industry, 1, MAX_INDUSTRY_LENGTH)?;
        Self::validate_duration(estimated_duration)?;
        Self::validate_text(
            "system_prompt",
            &system_prompt,
            MIN_SYSTEM_PROMPT_LENGTH,
            MAX_SYSTEM_PROMPT_LENGTH,
        )?;
        Self::validate_text(
            "initial_message",
            &initial_message,
            MIN_INITIAL_MESSAGE_LENGTH,
            MAX_INITIAL_MESSAGE_LENGTH,
        )?;
        Self::validate_tags(&tags)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            title,
            description,
            industry,
            difficulty,
            estimated_duration,
            system_prompt,
            initial_message,
            tags,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a template from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CaseTemplateId,
        title: String,
        description: String,
        industry: String,
        difficulty: Difficulty,
        estimated_duration: u16,
        system_prompt: String,
        initial_message: String,
        tags: Vec<String>,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            industry,
            difficulty,
            estimated_duration,
            system_prompt,
            initial_message,
            tags,
            is_active,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the template ID.
    pub fn id(&self) -> &CaseTemplateId {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the industry this case is set in.
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Returns the difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the estimated duration in minutes.
    pub fn estimated_duration(&self) -> u16 {
        self.estimated_duration
    }

    /// Returns the system prompt for the coaching conversation.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Returns the opening coach message shown when a session starts.
    pub fn initial_message(&self) -> &str {
        &self.initial_message
    }

    /// Returns the tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns true if the template is available for new sessions.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns when the template was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the template was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (admin surface)
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update, re-validating every changed field.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any updated field violates the invariants
    pub fn apply_update(&mut self, update: CaseTemplateUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            let title = title.trim().to_string();
            Self::validate_text("title", &title, 1, MAX_TITLE_LENGTH)?;
            self.title = title;
        }
        if let Some(description) = update.description {
            let description = description.trim().to_string();
            Self::validate_text("description", &description, 1, MAX_DESCRIPTION_LENGTH)?;
            self.description = description;
        }
        if let Some(industry) = update.industry {
            let industry = industry.trim().to_string();
            Self::validate_text("industry", &industry, 1, MAX_INDUSTRY_LENGTH)?;
            self.industry = industry;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(duration) = update.estimated_duration {
            Self::validate_duration(duration)?;
            self.estimated_duration = duration;
        }
        if let Some(system_prompt) = update.system_prompt {
            let system_prompt = system_prompt.trim().to_string();
            Self::validate_text(
                "system_prompt",
                &system_prompt,
                MIN_SYSTEM_PROMPT_LENGTH,
                MAX_SYSTEM_PROMPT_LENGTH,
            )?;
            self.system_prompt = system_prompt;
        }
        if let Some(initial_message) = update.initial_message {
            let initial_message = initial_message.trim().to_string();
            Self::validate_text(
                "initial_message",
                &initial_message,
                MIN_INITIAL_MESSAGE_LENGTH,
                MAX_INITIAL_MESSAGE_LENGTH,
            )?;
            self.initial_message = initial_message;
        }
        if let Some(tags) = update.tags {
            let tags: Vec<String> = tags.into_iter().map(|t| t.trim().to_string()).collect();
            Self::validate_tags(&tags)?;
            self.tags = tags;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }

        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Removes the template from the catalog without deleting it.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Timestamp::now();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_text(
        field: &str,
        value: &str,
        min: usize,
        max: usize,
    ) -> Result<(), DomainError> {
        if value.len() < min || value.len() > max {
            return Err(DomainError::validation(
                field,
                format!("{} must be {}-{} characters", field, min, max),
            ));
        }
        Ok(())
    }

    fn validate_duration(minutes: u16) -> Result<(), DomainError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
            return Err(DomainError::validation(
                "estimated_duration",
                format!(
                    "estimated_duration must be {}-{} minutes",
                    MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
                ),
            ));
        }
        Ok(())
    }

    fn validate_tags(tags: &[String]) -> Result<(), DomainError> {
        if tags.len() > MAX_TAGS {
            return Err(DomainError::validation(
                "tags",
                format!("cannot have more than {} tags", MAX_TAGS),
            ));
        }
        for tag in tags {
            if tag.is_empty() || tag.len() > MAX_TAG_LENGTH {
                return Err(DomainError::validation(
                    "tags",
                    format!("each tag must be 1-{} characters", MAX_TAG_LENGTH),
                ));
            }
        }
        Ok(())
    }
}
