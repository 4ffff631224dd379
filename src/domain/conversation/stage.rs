//! Conversation stage classification.
//!
//! A coaching conversation moves through five stages inferred purely from
//! the number of non-system messages exchanged so far. Because the stage is
//! a function of the current count and not of prior state, it never
//! regresses as the conversation grows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete phase of a coaching conversation.
///
/// Stages flow strictly forward with message count:
/// `Opening` -> `ProblemClarification` -> `FrameworkDevelopment` ->
/// `Analysis` -> `Conclusion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// First exchanges: framing the problem.
    Opening,

    /// Clarifying the problem statement and constraints.
    ProblemClarification,

    /// Building and testing a structured framework.
    FrameworkDevelopment,

    /// Working through the analysis.
    Analysis,

    /// Summarizing findings and recommending.
    Conclusion,
}

impl Stage {
    /// Classifies the stage from the number of non-system messages.
    ///
    /// Pure and total: no errors, no side effects.
    pub fn for_message_count(count: usize) -> Self {
        match count {
            0..=2 => Stage::Opening,
            3..=6 => Stage::ProblemClarification,
            7..=12 => Stage::FrameworkDevelopment,
            13..=20 => Stage::Analysis,
            _ => Stage::Conclusion,
        }
    }

    /// Returns the wire/label name of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Opening => "opening",
            Stage::ProblemClarification => "problem_clarification",
            Stage::FrameworkDevelopment => "framework_development",
            Stage::Analysis => "analysis",
            Stage::Conclusion => "conclusion",
        }
    }

    /// Returns true if this stage triggers final scoring and feedback.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Conclusion)
    }

    /// All stages in conversation order.
    pub fn all() -> [Stage; 5] {
        [
            Stage::Opening,
            Stage::ProblemClarification,
            Stage::FrameworkDevelopment,
            Stage::Analysis,
            Stage::Conclusion,
        ]
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod boundaries {
        use super::*;

        #[test]
        fn zero_messages_is_opening() {
            assert_eq!(Stage::for_message_count(0), Stage::Opening);
        }

        #[test]
        fn two_messages_is_opening() {
            assert_eq!(Stage::for_message_count(2), Stage::Opening);
        }

        #[test]
        fn three_messages_is_problem_clarification() {
            assert_eq!(Stage::for_message_count(3), Stage::ProblemClarification);
        }

        #[test]
        fn six_messages_is_problem_clarification() {
            assert_eq!(Stage::for_message_count(6), Stage::ProblemClarification);
        }

        #[test]
        fn seven_messages_is_framework_development() {
            assert_eq!(Stage::for_message_count(7), Stage::FrameworkDevelopment);
        }

        #[test]
        fn twelve_messages_is_framework_development() {
            assert_eq!(Stage::for_message_count(12), Stage::FrameworkDevelopment);
        }

        #[test]
        fn thirteen_messages_is_analysis() {
            assert_eq!(Stage::for_message_count(13), Stage::Analysis);
        }

        #[test]
        fn twenty_messages_is_analysis() {
            assert_eq!(Stage::for_message_count(20), Stage::Analysis);
        }

        #[test]
        fn twenty_one_messages_is_conclusion() {
            assert_eq!(Stage::for_message_count(21), Stage::Conclusion);
        }
    }

    mod labels {
        use super::*;

        #[test]
        fn wire_names_are_snake_case() {
            assert_eq!(Stage::Opening.as_str(), "opening");
            assert_eq!(
                Stage::ProblemClarification.as_str(),
                "problem_clarification"
            );
            assert_eq!(
                Stage::FrameworkDevelopment.as_str(),
                "framework_development"
            );
            assert_eq!(Stage::Analysis.as_str(), "analysis");
            assert_eq!(Stage::Conclusion.as_str(), "conclusion");
        }

        #[test]
        fn serde_matches_as_str() {
            for stage in Stage::all() {
                let json = serde_json::to_string(&stage).unwrap();
                assert_eq!(json, format!("\"{}\"", stage.as_str()));
            }
        }
    }

    mod terminality {
        use super::*;

        #[test]
        fn only_conclusion_is_terminal() {
            for stage in Stage::all() {
                assert_eq!(stage.is_terminal(), stage == Stage::Conclusion);
            }
        }
    }

    proptest! {
        /// Stage is a non-decreasing step function of message count.
        #[test]
        fn stage_never_regresses(n in 0usize..200) {
            let current = Stage::for_message_count(n);
            let next = Stage::for_message_count(n + 1);
            prop_assert!(next >= current);
        }

        #[test]
        fn large_counts_stay_in_conclusion(n in 21usize..10_000) {
            prop_assert_eq!(Stage::for_message_count(n), Stage::Conclusion);
        }
    }
}
