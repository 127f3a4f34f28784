//! Rationale text for estimate suggestions.

use super::types::ConfidenceLevel;

/// Fixed rationale for the no-data fallback.
pub const FALLBACK_RATIONALE: &str =
    "No similar items found with estimates. Suggesting default 3 points.";

/// Generic rationale when the candidate source fails.
pub const UNAVAILABLE_RATIONALE: &str = "Suggestion temporarily unavailable.";

/// Render the one-line justification for a suggestion. The confidence level
/// word comes from the same scale the aggregator produced, so the text and
/// the numeric score never disagree.
pub fn compose_rationale(estimate_count: usize, suggested_points: u32, confidence: f64) -> String {
    let level = ConfidenceLevel::from_confidence(confidence);
    match estimate_count {
        0 => FALLBACK_RATIONALE.to_owned(),
        1 => format!(
            "Based on 1 similar item with estimate {suggested_points}. Confidence: {}.",
            level.as_str()
        ),
        count => format!(
            "Based on median of {count} similar items (median: {suggested_points} points). Confidence: {}.",
            level.as_str()
        ),
    }
}
