//! Suggestion facade: the single entry point collaborators call.

use tracing::{debug, warn};

use crate::domain::item::WorkItem;
use crate::errors::DomainError;
use crate::repository::WorkItemRepository;

use super::aggregate::EstimateAggregator;
use super::ranking::CandidateRanker;
use super::rationale::compose_rationale;
use super::types::Suggestion;
use super::DEFAULT_RANK_LIMIT;

/// Orchestrates ranking, aggregation, and rationale composition. Holds no
/// state between calls; concurrent invocations are safe by construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuggestionEngine {
    ranker: CandidateRanker,
    aggregator: EstimateAggregator,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self { ranker: CandidateRanker::new(), aggregator: EstimateAggregator::new() }
    }

    /// Suggest an estimate for `target` with the default candidate limit.
    pub fn suggest(
        &self,
        target: &WorkItem,
        candidates: &[WorkItem],
    ) -> Result<Suggestion, DomainError> {
        self.suggest_with_limit(target, candidates, DEFAULT_RANK_LIMIT)
    }

    /// Suggest an estimate for `target` from a caller-supplied candidate
    /// snapshot. A zero `limit` is caller misuse and is rejected; sparse data
    /// is not an error and resolves to the fallback suggestion.
    pub fn suggest_with_limit(
        &self,
        target: &WorkItem,
        candidates: &[WorkItem],
        limit: usize,
    ) -> Result<Suggestion, DomainError> {
        if limit == 0 {
            return Err(DomainError::InvalidLimit);
        }

        let ranked = self.ranker.rank(target, candidates, limit);
        let outcome = self.aggregator.aggregate(&ranked);
        let rationale =
            compose_rationale(outcome.estimate_count, outcome.suggested_points, outcome.confidence);

        debug!(
            item_id = %target.id.0,
            ranked = ranked.len(),
            estimates = outcome.estimate_count,
            suggested_points = outcome.suggested_points,
            "estimate suggestion computed"
        );

        Ok(Suggestion {
            suggested_points: outcome.suggested_points,
            confidence: round_confidence(outcome.confidence),
            similar_item_ids: outcome.similar_item_ids,
            rationale,
        })
    }

    /// Fetch the candidate snapshot from `repository`, then suggest.
    ///
    /// A fetch failure is absorbed here and converted into the fallback shape
    /// with an unavailability rationale — the caller always receives a
    /// well-formed suggestion, never a partial one. Contract violations still
    /// surface as errors.
    pub async fn suggest_for(
        &self,
        repository: &dyn WorkItemRepository,
        target: &WorkItem,
        limit: usize,
    ) -> Result<Suggestion, DomainError> {
        if limit == 0 {
            return Err(DomainError::InvalidLimit);
        }

        match repository.fetch_candidates(&target.id).await {
            Ok(candidates) => self.suggest_with_limit(target, &candidates, limit),
            Err(error) => {
                warn!(
                    item_id = %target.id.0,
                    error = %error,
                    "candidate fetch failed, returning unavailable suggestion"
                );
                Ok(Suggestion::unavailable())
            }
        }
    }
}

/// Two-decimal presentation rounding, applied after the rationale's level
/// word has been derived from the unrounded score.
fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}
