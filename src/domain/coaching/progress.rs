//! Progress assessment over a user's message history.
//!
//! Engagement rewards total volume of whitespace-delimited words; structure
//! rewards presence of case-interview structuring vocabulary. Both are
//! coarse heuristics by design: structure is bag-of-keywords with no
//! frequency or position weighting, and a keyword appearing once or ten
//! times contributes the same 10 points.

use crate::domain::foundation::{DomainError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Structuring vocabulary scanned for in user messages.
///
/// Matching is substring-based over the lowercased concatenation of all
/// user message contents; each term found contributes 10 points, capped
/// at 100.
pub const STRUCTURE_KEYWORDS: [&str; 14] = [
    "first",
    "second",
    "third",
    "finally",
    "hypothesis",
    "assumption",
    "framework",
    "revenue",
    "cost",
    "profit",
    "market",
    "customer",
    "competition",
    "strategy",
];

/// Points contributed per structure keyword found.
const POINTS_PER_KEYWORD: f64 = 10.0;

/// Word count divisor and multiplier for the engagement heuristic:
/// `engagement = min(100, total_words / 50 * 20)`.
const ENGAGEMENT_WORD_BASELINE: f64 = 50.0;
const ENGAGEMENT_MULTIPLIER: f64 = 20.0;

/// Progress metrics derived from the user-authored messages of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressMetrics {
    engagement: f64,
    structure: f64,
    message_count: usize,
    average_message_length: f64,
}

impl ProgressMetrics {
    /// Creates metrics from raw values.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any value is non-finite or outside [0, 100]
    pub fn try_new(
        engagement: f64,
        structure: f64,
        message_count: usize,
        average_message_length: f64,
    ) -> Result<Self, DomainError> {
        for (field, value) in [
            ("engagement", engagement),
            ("structure", structure),
            ("average_message_length", average_message_length),
        ] {
            if !value.is_finite() {
                return Err(DomainError::new(
                    ErrorCode::ValidationFailed,
                    format!("{} must be a finite number", field),
                ));
            }
        }
        if !(0.0..=100.0).contains(&engagement) {
            return Err(DomainError::validation(
                "engagement",
                "engagement must be within [0, 100]",
            ));
        }
        if !(0.0..=100.0).contains(&structure) {
            return Err(DomainError::validation(
                "structure",
                "structure must be within [0, 100]",
            ));
        }

        Ok(Self {
            engagement,
            structure,
            message_count,
            average_message_length,
        })
    }

    /// Assesses progress from the contents of the user's messages, in
    /// conversation order.
    ///
    /// With no messages all metrics are zero. Never fails: the heuristics
    /// only produce finite in-range values.
    pub fn assess<'a>(user_contents: impl IntoIterator<Item = &'a str>) -> Self {
        let contents: Vec<&str> = user_contents.into_iter().collect();

        let total_words: usize = contents
            .iter()
            .map(|c| c.split_whitespace().count())
            .sum();

        let engagement = (total_words as f64 / ENGAGEMENT_WORD_BASELINE * ENGAGEMENT_MULTIPLIER)
            .min(100.0);

        let combined = contents.join(" ").to_lowercase();
        let structure = STRUCTURE_KEYWORDS
            .iter()
            .filter(|keyword| combined.contains(**keyword))
            .count() as f64
            * POINTS_PER_KEYWORD;
        let structure = structure.min(100.0);

        let message_count = contents.len();
        let average_message_length = total_words as f64 / message_count.max(1) as f64;

        Self {
            engagement,
            structure,
            message_count,
            average_message_length,
        }
    }

    /// Engagement score in [0, 100].
    pub fn engagement(&self) -> f64 {
        self.engagement
    }

    /// Structure score in [0, 100].
    pub fn structure(&self) -> f64 {
        self.structure
    }

    /// Number of user messages assessed.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Mean words per user message.
    pub fn average_message_length(&self) -> f64 {
        self.average_message_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod engagement {
        use super::*;

        #[test]
        fn zero_messages_scores_zero() {
            let metrics = ProgressMetrics::assess([]);
            assert_eq!(metrics.engagement(), 0.0);
            assert_eq!(metrics.structure(), 0.0);
            assert_eq!(metrics.message_count(), 0);
            assert_eq!(metrics.average_message_length(), 0.0);
        }

        #[test]
        fn fifty_words_scores_twenty() {
            let content = vec!["word"; 50].join(" ");
            let metrics = ProgressMetrics::assess([content.as_str()]);
            assert_eq!(metrics.engagement(), 20.0);
        }

        #[test]
        fn caps_at_one_hundred() {
            let content = vec!["word"; 1000].join(" ");
            let metrics = ProgressMetrics::assess([content.as_str()]);
            assert_eq!(metrics.engagement(), 100.0);
        }

        #[test]
        fn words_are_whitespace_delimited() {
            // Tabs and newlines separate words just like spaces
            let metrics = ProgressMetrics::assess(["one\ttwo\nthree  four"]);
            assert_eq!(metrics.average_message_length(), 4.0);
        }
    }

    mod structure {
        use super::*;

        #[test]
        fn exactly_first_and_revenue_scores_twenty() {
            let metrics =
                ProgressMetrics::assess(["I would look at this in two ways", "first the revenue side"]);
            assert_eq!(metrics.structure(), 20.0);
        }

        #[test]
        fn keyword_presence_is_not_frequency_weighted() {
            let once = ProgressMetrics::assess(["the framework"]);
            let many = ProgressMetrics::assess(["framework framework framework framework"]);
            assert_eq!(once.structure(), many.structure());
            assert_eq!(once.structure(), 10.0);
        }

        #[test]
        fn matching_is_case_insensitive() {
            let metrics = ProgressMetrics::assess(["My HYPOTHESIS is that COSTS grew"]);
            // "hypothesis" and "cost" (substring of "costs")
            assert_eq!(metrics.structure(), 20.0);
        }

        #[test]
        fn matching_is_substring_based() {
            // "firstly" contains "first"
            let metrics = ProgressMetrics::assess(["firstly we segment"]);
            assert_eq!(metrics.structure(), 10.0);
        }

        #[test]
        fn keywords_span_messages() {
            let metrics = ProgressMetrics::assess(["revenue is down", "profit margins shrank"]);
            assert_eq!(metrics.structure(), 20.0);
        }

        #[test]
        fn caps_at_one_hundred() {
            let all = STRUCTURE_KEYWORDS.join(" ");
            let metrics = ProgressMetrics::assess([all.as_str()]);
            assert_eq!(metrics.structure(), 100.0);
        }
    }

    mod average_length {
        use super::*;

        #[test]
        fn averages_across_messages() {
            let metrics = ProgressMetrics::assess(["one two three", "four five"]);
            assert_eq!(metrics.message_count(), 2);
            assert_eq!(metrics.average_message_length(), 2.5);
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn try_new_rejects_non_finite_values() {
            assert!(ProgressMetrics::try_new(f64::NAN, 50.0, 5, 10.0).is_err());
            assert!(ProgressMetrics::try_new(50.0, f64::INFINITY, 5, 10.0).is_err());
            assert!(ProgressMetrics::try_new(50.0, 50.0, 5, f64::NEG_INFINITY).is_err());
        }

        #[test]
        fn try_new_rejects_out_of_range_scores() {
            assert!(ProgressMetrics::try_new(101.0, 50.0, 5, 10.0).is_err());
            assert!(ProgressMetrics::try_new(50.0, -1.0, 5, 10.0).is_err());
        }

        #[test]
        fn try_new_accepts_valid_values() {
            let metrics = ProgressMetrics::try_new(80.0, 90.0, 10, 25.0).unwrap();
            assert_eq!(metrics.engagement(), 80.0);
            assert_eq!(metrics.structure(), 90.0);
        }
    }

    proptest! {
        /// Engagement and structure always stay within [0, 100].
        #[test]
        fn scores_stay_in_bounds(contents in proptest::collection::vec(".*", 0..20)) {
            let metrics = ProgressMetrics::assess(contents.iter().map(String::as_str));
            prop_assert!((0.0..=100.0).contains(&metrics.engagement()));
            prop_assert!((0.0..=100.0).contains(&metrics.structure()));
        }

        /// Structure is always a multiple of ten.
        #[test]
        fn structure_moves_in_steps_of_ten(contents in proptest::collection::vec("[a-z ]{0,80}", 0..10)) {
            let metrics = ProgressMetrics::assess(contents.iter().map(String::as_str));
            let steps = metrics.structure() / 10.0;
            prop_assert_eq!(steps.fract(), 0.0);
        }
    }
}
