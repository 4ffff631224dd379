//! Final session scoring.
//!
//! Combines the progress metrics into a single 0-100 score when a
//! conversation reaches its conclusion stage. Triggered exactly once per
//! session; the session aggregate enforces that the score is never
//! overwritten.

use crate::domain::foundation::Score;

use super::progress::ProgressMetrics;

const ENGAGEMENT_WEIGHT: f64 = 0.3;
const STRUCTURE_WEIGHT: f64 = 0.4;
const LENGTH_WEIGHT: f64 = 0.3;

/// Messages needed for full marks on the length component:
/// `length_score = min(100, message_count / 10 * 100)`.
const FULL_LENGTH_MESSAGE_COUNT: f64 = 10.0;

/// Computes the final session score from progress metrics.
///
/// Pure function. Inputs are guaranteed finite and in range by
/// [`ProgressMetrics`] construction.
pub fn final_score(metrics: &ProgressMetrics) -> Score {
    let length_score =
        (metrics.message_count() as f64 / FULL_LENGTH_MESSAGE_COUNT * 100.0).min(100.0);

    let weighted = metrics.engagement() * ENGAGEMENT_WEIGHT
        + metrics.structure() * STRUCTURE_WEIGHT
        + length_score * LENGTH_WEIGHT;

    Score::new(weighted.round() as u8)
}
