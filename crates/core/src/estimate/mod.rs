//! Effort estimate suggestions for unestimated work items.
//!
//! Ranks every other item by rule-based similarity to a target item, then
//! aggregates the estimates of the closest matches into a suggested point
//! value, a calibrated confidence score, and a short rationale. The whole
//! pipeline is a pure, synchronous computation over caller-supplied data.

mod aggregate;
mod engine;
mod ranking;
mod rationale;
mod scoring;
mod types;

pub use aggregate::EstimateAggregator;
pub use engine::SuggestionEngine;
pub use ranking::CandidateRanker;
pub use rationale::{compose_rationale, FALLBACK_RATIONALE, UNAVAILABLE_RATIONALE};
pub use scoring::SimilarityScorer;
pub use types::{AggregateOutcome, ConfidenceLevel, ScoredCandidate, Suggestion};

/// Default number of ranked candidates kept for aggregation.
pub const DEFAULT_RANK_LIMIT: usize = 20;

/// Maximum number of similar-item ids cited in a suggestion.
pub const CITATION_LIMIT: usize = 5;

/// Point value suggested when no similar estimates exist — the organization's
/// baseline for a small unknown task.
pub const FALLBACK_POINTS: u32 = 3;

/// Confidence reported with the fallback suggestion.
pub const FALLBACK_CONFIDENCE: f64 = 0.40;

/// Ceiling on reported confidence; the suggestion is inferred, never certain.
pub const MAX_CONFIDENCE: f64 = 0.95;
