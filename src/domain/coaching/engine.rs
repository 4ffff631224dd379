//! Coaching engine facade.
//!
//! Sequences stage classification, progress assessment, reply generation,
//! and conclusion-stage scoring for one incoming user message. The engine
//! is stateless: it works from a snapshot of the session history and
//! leaves persistence and session lifecycle to the application layer.

use crate::domain::case_template::CaseTemplate;
use crate::domain::conversation::{Message, Stage};
use crate::domain::foundation::{DomainError, Score};

use super::feedback::FeedbackSynthesizer;
use super::progress::ProgressMetrics;
use super::responder::ResponseGenerator;
use super::selector::{RandomTemplateSelector, TemplateSelector};

/// Everything the engine produces for one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    /// The coach's reply.
    pub content: String,

    /// The coach's reasoning trace for this turn.
    pub thinking: Option<String>,

    /// Suggested next moves for the user.
    pub suggestions: Option<Vec<String>>,

    /// Final score, present only when the conversation reached its
    /// conclusion on this turn.
    pub score: Option<Score>,

    /// Completion feedback report, present exactly when `score` is.
    pub feedback: Option<String>,
}

impl EngineOutput {
    /// Returns true if this turn concluded the session.
    pub fn concludes_session(&self) -> bool {
        self.score.is_some()
    }
}

/// Orchestrates one coaching turn over a session history snapshot.
///
/// Callers must serialize turns per session: the engine classifies the
/// stage from the history it is handed, so two concurrent turns over the
/// same session would both count the same messages.
#[derive(Debug, Clone)]
pub struct CoachingEngine<S: TemplateSelector> {
    generator: ResponseGenerator<S>,
    feedback: FeedbackSynthesizer,
}

impl CoachingEngine<RandomTemplateSelector> {
    /// Creates an engine with uniform-random template selection.
    pub fn with_random_selector() -> Self {
        Self::new(RandomTemplateSelector)
    }
}

impl Default for CoachingEngine<RandomTemplateSelector> {
    fn default() -> Self {
        Self::with_random_selector()
    }
}

impl<S: TemplateSelector> CoachingEngine<S> {
    /// Creates an engine with the given template selection strategy.
    pub fn new(selector: S) -> Self {
        Self {
            generator: ResponseGenerator::new(selector),
            feedback: FeedbackSynthesizer,
        }
    }

    /// Produces the coaching output for one incoming user message.
    ///
    /// `history` is the session's messages so far, ordered by timestamp
    /// ascending and not yet including `user_content`. The stage is
    /// classified from the count of non-system messages including the
    /// incoming one; progress is assessed over the user-authored contents
    /// plus the incoming one.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `user_content` is blank after trimming
    pub fn respond(
        &self,
        template: &CaseTemplate,
        history: &[Message],
        user_content: &str,
    ) -> Result<EngineOutput, DomainError> {
        let user_content = user_content.trim();
        if user_content.is_empty() {
            return Err(DomainError::validation(
                "content",
                "Message content cannot be empty",
            ));
        }

        let counted = history
            .iter()
            .filter(|m| m.role().counts_for_coaching())
            .count()
            + 1;
        let stage = Stage::for_message_count(counted);

        let metrics = ProgressMetrics::assess(
            history
                .iter()
                .filter(|m| m.is_user())
                .map(Message::content)
                .chain(std::iter::once(user_content)),
        );

        let mut output = self.generator.generate(template, stage, &metrics, user_content);
        if output.score.is_some() {
            output.feedback = Some(self.feedback.synthesize(&metrics));
        }

        Ok(output)
    }
}
