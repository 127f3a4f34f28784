//! Candidate ranking for estimate suggestions.

use crate::domain::item::WorkItem;

use super::scoring::SimilarityScorer;
use super::types::ScoredCandidate;

/// Applies the scorer to a candidate population and orders the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct CandidateRanker {
    scorer: SimilarityScorer,
}

impl CandidateRanker {
    pub fn new() -> Self {
        Self { scorer: SimilarityScorer::new() }
    }

    /// Rank `candidates` by similarity to `target`, most similar first.
    ///
    /// The target is excluded by id before any scoring, zero-score candidates
    /// are dropped, score ties go to the more recently modified item, and the
    /// result is truncated to `limit`. An empty population is not an error:
    /// it yields an empty ranking, which downstream treats as the
    /// no-similar-items case.
    pub fn rank<'a>(
        &self,
        target: &WorkItem,
        candidates: &'a [WorkItem],
        limit: usize,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut scored: Vec<ScoredCandidate<'a>> = candidates
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .filter_map(|candidate| {
                let score = self.scorer.score(target, candidate);
                (score > 0).then_some(ScoredCandidate { item: candidate, score })
            })
            .collect();

        scored.sort_by(|left, right| {
            right
                .score
                .cmp(&left.score)
                .then_with(|| right.item.updated_at.cmp(&left.item.updated_at))
        });
        scored.truncate(limit);
        scored
    }
}
