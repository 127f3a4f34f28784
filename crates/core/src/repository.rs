//! Candidate retrieval contract consumed by the suggestion engine.
//!
//! Persistent storage lives outside this crate; the engine only requires a
//! finite, already-materialized snapshot of the candidate population with
//! inactive records filtered out by the implementation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::item::{WorkItem, WorkItemId};
use crate::errors::DomainError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[async_trait]
pub trait WorkItemRepository: Send + Sync {
    /// Every active item except the one identified by `excluding`.
    async fn fetch_candidates(
        &self,
        excluding: &WorkItemId,
    ) -> Result<Vec<WorkItem>, RepositoryError>;
}

/// In-memory store for tests, fixtures, and embedding callers. Iteration is
/// id-ordered so repeated fetches return candidates in a stable order.
#[derive(Debug, Default)]
pub struct InMemoryWorkItemRepository {
    items: RwLock<BTreeMap<Uuid, WorkItem>>,
}

impl InMemoryWorkItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an item, replacing any previous version.
    pub fn save(&self, item: WorkItem) -> Result<(), RepositoryError> {
        item.validate()?;
        let mut items = match self.items.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        items.insert(item.id.0, item);
        Ok(())
    }
}

#[async_trait]
impl WorkItemRepository for InMemoryWorkItemRepository {
    async fn fetch_candidates(
        &self,
        excluding: &WorkItemId,
    ) -> Result<Vec<WorkItem>, RepositoryError> {
        let items = match self.items.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(items.values().filter(|item| item.id != *excluding).cloned().collect())
    }
}
