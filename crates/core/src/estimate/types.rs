//! Types for the estimate suggestion pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::item::{WorkItem, WorkItemId};

use super::{FALLBACK_CONFIDENCE, FALLBACK_POINTS, UNAVAILABLE_RATIONALE};

/// A candidate paired with its similarity score for one ranking pass.
/// Zero-score candidates are dropped before construction, so `score >= 1`.
#[derive(Clone, Copy, Debug)]
pub struct ScoredCandidate<'a> {
    pub item: &'a WorkItem,
    pub score: u32,
}

/// Aggregation result consumed by the rationale composer and the facade.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateOutcome {
    pub suggested_points: u32,
    pub confidence: f64,
    pub similar_item_ids: Vec<WorkItemId>,
    pub estimate_count: usize,
}

/// The suggestion handed back to callers. Built once per call, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggested_points: u32,
    pub confidence: f64,
    pub similar_item_ids: Vec<WorkItemId>,
    pub rationale: String,
}

impl Suggestion {
    /// Fallback shape returned when the candidate source fails. Same policy
    /// values as the no-data fallback, with a generic unavailability
    /// rationale.
    pub fn unavailable() -> Self {
        Self {
            suggested_points: FALLBACK_POINTS,
            confidence: FALLBACK_CONFIDENCE,
            similar_item_ids: Vec::new(),
            rationale: UNAVAILABLE_RATIONALE.to_owned(),
        }
    }
}

/// Verbal confidence band used in rationale text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Confidence >= 0.80.
    High,
    /// Confidence 0.65 - 0.79.
    Medium,
    /// Anything below 0.65, including the fallback.
    Low,
}

impl ConfidenceLevel {
    /// Band thresholds are a presentation of the aggregator's confidence
    /// scale, not an independent judgment.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.80 {
            ConfidenceLevel::High
        } else if confidence >= 0.65 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}
