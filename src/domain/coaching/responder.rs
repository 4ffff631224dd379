//! Coaching reply generation.
//!
//! Replies are drawn from fixed per-stage template pools; the thinking
//! trace and suggestions are parameterized by stage and progress metrics.
//! The latest user message content is accepted but not consulted by the
//! heuristic logic - it is reserved for a future language-model backend.

use crate::domain::case_template::CaseTemplate;
use crate::domain::conversation::Stage;

use super::engine::EngineOutput;
use super::progress::ProgressMetrics;
use super::scorer::final_score;
use super::selector::TemplateSelector;

/// Generates one coaching turn: reply, thinking trace, and suggestions.
#[derive(Debug, Clone)]
pub struct ResponseGenerator<S: TemplateSelector> {
    selector: S,
}

impl<S: TemplateSelector> ResponseGenerator<S> {
    /// Creates a generator with the given selection strategy.
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    /// Generates the coaching output for one turn.
    ///
    /// The reply is picked from the stage's pool by the injected selector;
    /// at the conclusion stage the final score is attached. Feedback
    /// synthesis is the orchestrator's job and is left unset here.
    pub fn generate(
        &self,
        template: &CaseTemplate,
        stage: Stage,
        metrics: &ProgressMetrics,
        _user_message: &str,
    ) -> EngineOutput {
        let pool = Self::response_pool(template.industry(), stage);
        let content = pool[self.selector.pick(pool.len())].to_string();

        let thinking = Self::thinking_trace(stage, metrics);
        let suggestions = Self::suggestions(stage);

        let score = if stage.is_terminal() {
            Some(final_score(metrics))
        } else {
            None
        };

        EngineOutput {
            content,
            thinking: Some(thinking),
            suggestions: Some(suggestions.iter().map(|s| s.to_string()).collect()),
            score,
            feedback: None,
        }
    }

    /// Fixed reply pool for a stage.
    ///
    /// The industry is accepted for template-bucket selection but the
    /// current pools are industry-agnostic.
    pub fn response_pool(_industry: &str, stage: Stage) -> &'static [&'static str] {
        match stage {
            Stage::Opening => &[
                "Great! Let's dive into this case. Can you start by clarifying what you understand about the problem?",
                "Excellent. Before we begin our analysis, what initial questions do you have about the situation?",
                "Perfect. Let's structure our approach. What framework would you use to tackle this problem?",
            ],
            Stage::ProblemClarification => &[
                "That's a good start. Can you be more specific about the key drivers you'd want to investigate?",
                "Interesting perspective. What assumptions are you making here, and how would you validate them?",
                "Good thinking. How would you prioritize these factors in your analysis?",
            ],
            Stage::FrameworkDevelopment => &[
                "I like your structured approach. Can you walk me through each component of your framework?",
                "That's a solid framework. How would you adapt it specifically for this industry context?",
                "Good structure. What data would you need to test each part of your hypothesis?",
            ],
            Stage::Analysis => &[
                "Excellent analysis. What are the implications of these findings for our recommendation?",
                "That's insightful. How would you quantify the impact of this factor?",
                "Good point. What potential risks or challenges do you see with this approach?",
            ],
            Stage::Conclusion => &[
                "Great work! Can you summarize your key findings and recommendation?",
                "Excellent analysis throughout. What would be your next steps if you were presenting to the client?",
                "Well done. How confident are you in your recommendation, and what would make you more certain?",
            ],
        }
    }

    /// Fixed suggestion list for a stage.
    pub fn suggestions(stage: Stage) -> &'static [&'static str] {
        match stage {
            Stage::Opening => &[
                "Start with a structured framework",
                "Clarify the problem statement",
                "Ask about key constraints",
            ],
            Stage::ProblemClarification => &[
                "Define success metrics",
                "Identify key stakeholders",
                "Understand the timeline",
            ],
            Stage::FrameworkDevelopment => &[
                "Consider market dynamics",
                "Analyze competitive landscape",
                "Evaluate internal capabilities",
            ],
            Stage::Analysis => &[
                "Quantify the impact",
                "Consider implementation challenges",
                "Think about risks and mitigation",
            ],
            Stage::Conclusion => &[
                "Summarize key insights",
                "Make a clear recommendation",
                "Outline next steps",
            ],
        }
    }

    /// Builds the three-sentence thinking trace for a turn.
    fn thinking_trace(stage: Stage, metrics: &ProgressMetrics) -> String {
        let structure_quality = if metrics.structure() > 70.0 {
            "strong"
        } else {
            "developing"
        };
        let engagement_level = if metrics.engagement() > 60.0 {
            "high"
        } else {
            "moderate"
        };
        let intent = match stage {
            Stage::Opening => "encourage framework development",
            Stage::Analysis => "push for deeper insights",
            _ => "guide toward conclusions",
        };

        format!(
            "The user is showing {} structured thinking at the {} stage. \
             Their engagement level is {} with an average message length of {} words. \
             I should {}.",
            structure_quality,
            stage.as_str(),
            engagement_level,
            metrics.average_message_length().round() as i64,
            intent,
        )
    }
}
