use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Upper bound on a single item's estimate, enforced on the write path.
pub const MAX_ESTIMATE_POINTS: u32 = 100;

const MIN_TITLE_CHARS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkItemId(pub Uuid);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

/// Person an item is assigned to. Identity comparisons use `id` only; `name`
/// exists for narrative output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: UserId,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkItemStatus {
    Todo,
    InProgress,
    Blocked,
    Done,
}

impl WorkItemStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkItemStatus::Todo => "To Do",
            WorkItemStatus::InProgress => "In Progress",
            WorkItemStatus::Blocked => "Blocked",
            WorkItemStatus::Done => "Done",
        }
    }
}

/// The unit of work being estimated. Immutable input to the engine — every
/// component only reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: WorkItemId,
    pub title: String,
    pub description: String,
    pub status: WorkItemStatus,
    pub assignee: Option<Assignee>,
    pub tags: BTreeSet<String>,
    pub estimate: Option<u32>,
    pub updated_at: DateTime<Utc>,
}

impl WorkItem {
    /// Write-path invariants. The engine itself never mutates items, so this
    /// runs where items enter a store, not inside scoring.
    pub fn validate(&self) -> Result<(), DomainError> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvariantViolation(
                "item title cannot be empty or just whitespace".to_owned(),
            ));
        }
        if trimmed.chars().count() < MIN_TITLE_CHARS {
            return Err(DomainError::InvariantViolation(format!(
                "item title must be at least {MIN_TITLE_CHARS} characters long"
            )));
        }
        if let Some(points) = self.estimate {
            if points > MAX_ESTIMATE_POINTS {
                return Err(DomainError::InvariantViolation(format!(
                    "item estimate cannot exceed {MAX_ESTIMATE_POINTS} points"
                )));
            }
        }
        if self.status == WorkItemStatus::Done && self.estimate.is_none() {
            return Err(DomainError::InvariantViolation(
                "items marked as Done must have an estimate".to_owned(),
            ));
        }
        Ok(())
    }
}
