//! Rule-based similarity scoring between work items.
//!
//! The score is the sum of four independently evaluated signals. Assignee
//! identity is the strongest behavioral signal, tag overlap is a strong
//! categorical signal that scales with breadth, and free-text overlap is
//! noisy and therefore capped so one very similar sentence cannot drown out
//! the structured signals.

use std::collections::HashSet;

use crate::domain::item::WorkItem;

/// Flat score for a shared assignee.
const ASSIGNEE_SCORE: u32 = 100;
/// Score per overlapping tag, uncapped.
const TAG_SCORE: u32 = 80;
/// Score per overlapping title word.
const TITLE_WORD_SCORE: u32 = 20;
/// Ceiling on the title-overlap signal.
const TITLE_SIGNAL_CAP: u32 = 60;
/// Score per overlapping description word.
const DESCRIPTION_WORD_SCORE: u32 = 5;
/// Ceiling on the description-overlap signal.
const DESCRIPTION_SIGNAL_CAP: u32 = 40;

/// Stateless pairwise scorer. Deterministic for fixed inputs; all four
/// signals are always evaluated and summed, there is no early exit.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, target: &WorkItem, candidate: &WorkItem) -> u32 {
        self.assignee_signal(target, candidate)
            + self.tag_signal(target, candidate)
            + self.title_signal(target, candidate)
            + self.description_signal(target, candidate)
    }

    fn assignee_signal(&self, target: &WorkItem, candidate: &WorkItem) -> u32 {
        match (&target.assignee, &candidate.assignee) {
            (Some(ours), Some(theirs)) if ours.id == theirs.id => ASSIGNEE_SCORE,
            _ => 0,
        }
    }

    fn tag_signal(&self, target: &WorkItem, candidate: &WorkItem) -> u32 {
        let shared = target.tags.intersection(&candidate.tags).count() as u32;
        shared * TAG_SCORE
    }

    fn title_signal(&self, target: &WorkItem, candidate: &WorkItem) -> u32 {
        (word_overlap(&target.title, &candidate.title) * TITLE_WORD_SCORE).min(TITLE_SIGNAL_CAP)
    }

    fn description_signal(&self, target: &WorkItem, candidate: &WorkItem) -> u32 {
        (word_overlap(&target.description, &candidate.description) * DESCRIPTION_WORD_SCORE)
            .min(DESCRIPTION_SIGNAL_CAP)
    }
}

/// Shared-word count between two texts. Tokens are lower-cased,
/// whitespace-delimited substrings; no stemming or stop-word removal, an
/// accepted limitation of the rule-based approach. Empty or whitespace-only
/// text never overlaps.
fn word_overlap(left: &str, right: &str) -> u32 {
    if left.trim().is_empty() || right.trim().is_empty() {
        return 0;
    }
    let left_words = word_tokens(left);
    let right_words = word_tokens(right);
    left_words.intersection(&right_words).count() as u32
}

fn word_tokens(text: &str) -> HashSet<String> {
    text.to_lowercase().split_whitespace().map(str::to_owned).collect()
}
