//! Lifecycle summaries for work items.
//!
//! Deterministic, template-driven narrative built from item state plus the
//! activity count supplied by the caller — the audit log that produces the
//! count lives outside this crate.

use std::collections::BTreeSet;

use crate::domain::item::{WorkItem, WorkItemStatus};

#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryGenerator;

impl SummaryGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, item: &WorkItem, activity_count: usize) -> String {
        let status_text = item.status.display_name().to_lowercase();

        let mut summary = if activity_count <= 1 {
            format!("This item was created and is currently {status_text}.")
        } else if activity_count <= 3 {
            format!(
                "This item has had {activity_count} activities and is currently {status_text}."
            )
        } else {
            format!(
                "This item has been actively worked on with {activity_count} activities and is currently {status_text}."
            )
        };

        if let Some(assignee) = &item.assignee {
            summary.push_str(&format!(" It is assigned to {}.", assignee.name));
        }
        if let Some(points) = item.estimate {
            summary.push_str(&format!(" The estimated effort is {points} points."));
        }
        if !item.tags.is_empty() {
            summary.push_str(&tag_fragment(&item.tags));
        }

        match item.status {
            WorkItemStatus::Done => {
                summary.push_str(" The item has been completed successfully.");
            }
            WorkItemStatus::Blocked => {
                summary.push_str(" The item is currently blocked and may need attention.");
            }
            WorkItemStatus::InProgress => {
                summary.push_str(" Work is actively in progress on this item.");
            }
            WorkItemStatus::Todo => {}
        }

        summary
    }
}

fn tag_fragment(tags: &BTreeSet<String>) -> String {
    let names: Vec<&str> = tags.iter().map(String::as_str).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => format!(" It is tagged with '{only}'."),
        [head @ .., last] => {
            let quoted: Vec<String> = head.iter().map(|name| format!("'{name}'")).collect();
            format!(" It is tagged with {} and '{last}'.", quoted.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::item::{Assignee, UserId, WorkItem, WorkItemId, WorkItemStatus};

    use super::SummaryGenerator;

    fn item(status: WorkItemStatus) -> WorkItem {
        WorkItem {
            id: WorkItemId(Uuid::new_v4()),
            title: "Improve search relevance".to_owned(),
            description: String::new(),
            status,
            assignee: None,
            tags: BTreeSet::new(),
            estimate: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn freshly_created_item_reads_as_created() {
        let summary = SummaryGenerator::new().generate(&item(WorkItemStatus::Todo), 1);
        assert_eq!(summary, "This item was created and is currently to do.");
    }

    #[test]
    fn busy_item_mentions_activity_volume_and_progress() {
        let mut subject = item(WorkItemStatus::InProgress);
        subject.assignee =
            Some(Assignee { id: UserId(Uuid::new_v4()), name: "casey".to_owned() });
        subject.estimate = Some(5);

        let summary = SummaryGenerator::new().generate(&subject, 7);

        assert_eq!(
            summary,
            "This item has been actively worked on with 7 activities and is currently in progress. \
             It is assigned to casey. The estimated effort is 5 points. \
             Work is actively in progress on this item."
        );
    }

    #[test]
    fn single_tag_is_quoted() {
        let mut subject = item(WorkItemStatus::Todo);
        subject.tags = ["backend".to_owned()].into_iter().collect();

        let summary = SummaryGenerator::new().generate(&subject, 1);
        assert!(summary.ends_with(" It is tagged with 'backend'."));
    }

    #[test]
    fn multiple_tags_join_with_and() {
        let mut subject = item(WorkItemStatus::Todo);
        subject.tags =
            ["api".to_owned(), "backend".to_owned(), "search".to_owned()].into_iter().collect();

        let summary = SummaryGenerator::new().generate(&subject, 1);
        assert!(summary.ends_with(" It is tagged with 'api', 'backend' and 'search'."));
    }

    #[test]
    fn blocked_items_get_the_attention_closer() {
        let summary = SummaryGenerator::new().generate(&item(WorkItemStatus::Blocked), 2);
        assert_eq!(
            summary,
            "This item has had 2 activities and is currently blocked. \
             The item is currently blocked and may need attention."
        );
    }

    #[test]
    fn done_items_get_the_completion_closer() {
        let mut subject = item(WorkItemStatus::Done);
        subject.estimate = Some(3);

        let summary = SummaryGenerator::new().generate(&subject, 4);
        assert!(summary.ends_with("The item has been completed successfully."));
    }
}
