//! Session feedback synthesis.
//!
//! Turns a completed session's progress metrics into the human-readable
//! report stored on the session record. Unlike reply generation this is
//! fully deterministic: the same metrics always produce the same text.

use super::progress::ProgressMetrics;

const STRUCTURE_STRENGTH_THRESHOLD: f64 = 70.0;
const ENGAGEMENT_STRENGTH_THRESHOLD: f64 = 60.0;
const THOROUGH_MESSAGE_COUNT: usize = 8;

const NEXT_STEPS: &str = "Continue practicing with similar cases and focus on developing structured problem-solving approaches.";

/// Synthesizes the end-of-session feedback report.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackSynthesizer;

impl FeedbackSynthesizer {
    /// Builds the feedback report for a completed session.
    ///
    /// The report lists strengths and improvement areas from threshold
    /// rules over structure, engagement, and user message count, an
    /// overall rating line, and a fixed next-steps sentence.
    pub fn synthesize(&self, metrics: &ProgressMetrics) -> String {
        let mut strengths = Vec::new();
        let mut improvements = Vec::new();

        if metrics.structure() > STRUCTURE_STRENGTH_THRESHOLD {
            strengths.push("Strong structured thinking and framework usage");
        } else {
            improvements.push("Work on developing more structured frameworks");
        }

        if metrics.engagement() > ENGAGEMENT_STRENGTH_THRESHOLD {
            strengths.push("Good engagement and detailed responses");
        } else {
            improvements.push("Try to provide more detailed analysis");
        }

        if metrics.message_count() >= THOROUGH_MESSAGE_COUNT {
            strengths.push("Thorough exploration of the case");
        } else {
            improvements.push("Consider asking more clarifying questions");
        }

        let rating = Self::overall_rating(metrics);

        format!(
            "**Session Feedback**\n\n\
             **Strengths:**\n{}\n\n\
             **Areas for Improvement:**\n{}\n\n\
             **Overall Performance:** {}\n\n\
             **Next Steps:** {}",
            Self::bullets(&strengths),
            Self::bullets(&improvements),
            rating,
            NEXT_STEPS,
        )
        .trim()
        .to_string()
    }

    /// Overall rating line: Strong, Good, or Developing.
    fn overall_rating(metrics: &ProgressMetrics) -> &'static str {
        if metrics.structure() > 70.0 && metrics.engagement() > 60.0 {
            "Strong"
        } else if metrics.structure() > 50.0 || metrics.engagement() > 50.0 {
            "Good"
        } else {
            "Developing"
        }
    }

    fn bullets(items: &[&str]) -> String {
        items
            .iter()
            .map(|item| format!("\u{2022} {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
