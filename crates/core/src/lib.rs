pub mod domain;
pub mod errors;
pub mod estimate;
pub mod repository;
pub mod rewrite;
pub mod summary;

pub use domain::item::{Assignee, UserId, WorkItem, WorkItemId, WorkItemStatus};
pub use errors::DomainError;
pub use estimate::{
    CandidateRanker, ConfidenceLevel, EstimateAggregator, ScoredCandidate, SimilarityScorer,
    Suggestion, SuggestionEngine,
};
pub use repository::{InMemoryWorkItemRepository, RepositoryError, WorkItemRepository};
pub use rewrite::{RewriteGenerator, RewriteSuggestion};
pub use summary::SummaryGenerator;
