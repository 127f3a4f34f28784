//! Median and confidence aggregation over ranked candidates.

use super::types::{AggregateOutcome, ScoredCandidate};
use super::{CITATION_LIMIT, FALLBACK_CONFIDENCE, FALLBACK_POINTS, MAX_CONFIDENCE};

/// Confidence baseline once at least one similar estimate exists.
const BASE_CONFIDENCE: f64 = 0.65;
/// Weight of the corroborating-estimate count factor.
const COUNT_WEIGHT: f64 = 0.15;
/// Estimate count at which the count factor saturates.
const COUNT_SATURATION: f64 = 5.0;
/// Weight of the estimate-consistency factor.
const CONSISTENCY_WEIGHT: f64 = 0.10;
/// Consistency credit for a lone estimate: not corroborated, but not
/// penalized as if highly inconsistent either.
const SINGLE_ESTIMATE_BONUS: f64 = 0.05;
/// Weight of the similar-item context factor.
const CONTEXT_WEIGHT: f64 = 0.10;
/// Ranked-candidate count at which the context factor saturates.
const CONTEXT_SATURATION: f64 = 10.0;

/// Turns a ranked candidate list into a point value, a confidence score, and
/// the cited similar-item ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstimateAggregator;

impl EstimateAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate `ranked` (already bounded and in rank order).
    ///
    /// Only candidates carrying an estimate feed the median and the
    /// confidence factors. If none do, the fixed fallback policy applies.
    /// Citations always come from the overall top of the ranking — the most
    /// similar items are referenced even when some of them lack estimates,
    /// because they explain the similarity, not the number.
    pub fn aggregate(&self, ranked: &[ScoredCandidate<'_>]) -> AggregateOutcome {
        let estimates: Vec<u32> =
            ranked.iter().filter_map(|candidate| candidate.item.estimate).collect();

        if estimates.is_empty() {
            return AggregateOutcome {
                suggested_points: FALLBACK_POINTS,
                confidence: FALLBACK_CONFIDENCE,
                similar_item_ids: Vec::new(),
                estimate_count: 0,
            };
        }

        AggregateOutcome {
            suggested_points: median_points(&estimates),
            confidence: self.confidence(&estimates, ranked.len()),
            similar_item_ids: ranked
                .iter()
                .take(CITATION_LIMIT)
                .map(|candidate| candidate.item.id)
                .collect(),
            estimate_count: estimates.len(),
        }
    }

    fn confidence(&self, estimates: &[u32], ranked_count: usize) -> f64 {
        let count_factor = (estimates.len() as f64 / COUNT_SATURATION).min(1.0) * COUNT_WEIGHT;

        let consistency_factor = if estimates.len() > 1 {
            let largest = f64::from(estimates.iter().copied().max().unwrap_or(0));
            // All-zero estimates have zero variance, so treat the normalized
            // variance as zero rather than dividing by zero.
            let normalized = if largest > 0.0 {
                population_variance(estimates) / (largest * largest)
            } else {
                0.0
            };
            (1.0 - normalized.min(1.0)) * CONSISTENCY_WEIGHT
        } else {
            SINGLE_ESTIMATE_BONUS
        };

        let context_factor = (ranked_count as f64 / CONTEXT_SATURATION).min(1.0) * CONTEXT_WEIGHT;

        (BASE_CONFIDENCE + count_factor + consistency_factor + context_factor).min(MAX_CONFIDENCE)
    }
}

/// Conventional median, truncated toward zero when the two middle values of
/// an even-sized set average to a half point. Truncation matches the system
/// this engine suggests into; round-half-up is the documented alternative.
fn median_points(estimates: &[u32]) -> u32 {
    debug_assert!(!estimates.is_empty(), "median requires at least one estimate");
    let mut sorted = estimates.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2
    }
}

fn population_variance(values: &[u32]) -> f64 {
    let count = values.len() as f64;
    let mean = values.iter().map(|value| f64::from(*value)).sum::<f64>() / count;
    values
        .iter()
        .map(|value| {
            let delta = f64::from(*value) - mean;
            delta * delta
        })
        .sum::<f64>()
        / count
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::item::{WorkItem, WorkItemId, WorkItemStatus};
    use crate::estimate::types::ScoredCandidate;
    use crate::estimate::{FALLBACK_CONFIDENCE, FALLBACK_POINTS, MAX_CONFIDENCE};

    use super::{median_points, population_variance, EstimateAggregator};

    fn item(estimate: Option<u32>) -> WorkItem {
        WorkItem {
            id: WorkItemId(Uuid::new_v4()),
            title: "candidate".to_owned(),
            description: String::new(),
            status: WorkItemStatus::Todo,
            assignee: None,
            tags: BTreeSet::new(),
            estimate,
            updated_at: Utc::now(),
        }
    }

    fn ranked(items: &[WorkItem]) -> Vec<ScoredCandidate<'_>> {
        items.iter().map(|item| ScoredCandidate { item, score: 1 }).collect()
    }

    #[test]
    fn no_estimates_returns_the_fixed_fallback() {
        let aggregator = EstimateAggregator::new();
        let pool = vec![item(None), item(None)];

        let outcome = aggregator.aggregate(&ranked(&pool));

        assert_eq!(outcome.suggested_points, FALLBACK_POINTS);
        assert!((outcome.confidence - FALLBACK_CONFIDENCE).abs() < f64::EPSILON);
        assert!(outcome.similar_item_ids.is_empty());
        assert_eq!(outcome.estimate_count, 0);
    }

    #[test]
    fn odd_count_median_is_the_middle_value() {
        assert_eq!(median_points(&[2, 3, 3, 5, 8]), 3);
    }

    #[test]
    fn even_count_median_averages_then_truncates() {
        assert_eq!(median_points(&[3, 5]), 4);
        assert_eq!(median_points(&[2, 3]), 2);
    }

    #[test]
    fn median_sorts_its_input_first() {
        assert_eq!(median_points(&[8, 2, 5, 3, 3]), 3);
    }

    #[test]
    fn citations_come_from_the_overall_ranking_including_estimate_less_items() {
        let aggregator = EstimateAggregator::new();
        let pool = vec![item(None), item(Some(5)), item(Some(3))];

        let outcome = aggregator.aggregate(&ranked(&pool));

        // The estimate-less leader is still cited first.
        assert_eq!(outcome.similar_item_ids[0], pool[0].id);
        assert_eq!(outcome.similar_item_ids.len(), 3);
        assert_eq!(outcome.estimate_count, 2);
    }

    #[test]
    fn citations_are_capped_at_five() {
        let aggregator = EstimateAggregator::new();
        let pool: Vec<WorkItem> = (0..12).map(|_| item(Some(3))).collect();

        let outcome = aggregator.aggregate(&ranked(&pool));

        assert_eq!(outcome.similar_item_ids.len(), 5);
        let expected: Vec<_> = pool.iter().take(5).map(|item| item.id).collect();
        assert_eq!(outcome.similar_item_ids, expected);
    }

    #[test]
    fn lone_estimate_gets_the_fixed_consistency_bonus() {
        let aggregator = EstimateAggregator::new();
        let pool = vec![item(Some(5))];

        let outcome = aggregator.aggregate(&ranked(&pool));

        // 0.65 base + 0.03 count + 0.05 lone-estimate bonus + 0.01 context
        assert!((outcome.confidence - 0.74).abs() < 1e-9);
    }

    #[test]
    fn identical_estimates_earn_full_consistency_credit() {
        let aggregator = EstimateAggregator::new();
        let pool: Vec<WorkItem> = (0..5).map(|_| item(Some(5))).collect();

        let outcome = aggregator.aggregate(&ranked(&pool));

        // 0.65 + 0.15 + 0.10 + 0.05 — saturated count, zero variance.
        assert!((outcome.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn scattered_estimates_earn_less_confidence_than_tight_ones() {
        let aggregator = EstimateAggregator::new();
        let tight = vec![item(Some(5)), item(Some(5))];
        let scattered = vec![item(Some(1)), item(Some(10))];

        let tight_outcome = aggregator.aggregate(&ranked(&tight));
        let scattered_outcome = aggregator.aggregate(&ranked(&scattered));

        assert!(tight_outcome.confidence > scattered_outcome.confidence);
    }

    #[test]
    fn confidence_never_exceeds_the_cap() {
        let aggregator = EstimateAggregator::new();
        let pool: Vec<WorkItem> = (0..20).map(|_| item(Some(8))).collect();

        let outcome = aggregator.aggregate(&ranked(&pool));

        assert!(outcome.confidence <= MAX_CONFIDENCE);
        assert!((outcome.confidence - MAX_CONFIDENCE).abs() < 1e-9);
    }

    #[test]
    fn all_zero_estimates_do_not_divide_by_zero() {
        let aggregator = EstimateAggregator::new();
        let pool = vec![item(Some(0)), item(Some(0))];

        let outcome = aggregator.aggregate(&ranked(&pool));

        assert_eq!(outcome.suggested_points, 0);
        assert!(outcome.confidence.is_finite());
        // Zero variance still counts as fully consistent.
        assert!((outcome.confidence - (0.65 + 0.06 + 0.10 + 0.02)).abs() < 1e-9);
    }

    #[test]
    fn population_variance_uses_the_full_denominator() {
        // Mean 5.5, squared deltas 20.25 each, population variance 20.25.
        assert!((population_variance(&[1, 10]) - 20.25).abs() < 1e-9);
        assert!(population_variance(&[4, 4, 4]).abs() < f64::EPSILON);
    }
}
