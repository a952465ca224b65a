use chrono::{DateTime, Utc};

use super::household::{IconCategory, classify_household};
use super::living_arrangement::LivingArrangement;
use super::occupation::Occupation;
use super::record::Record;

/// Label preceding the living arrangement line.
pub const LIVING_LABEL: &str = "Living arrangement";
/// Label preceding the money worries line.
pub const ISSUE_LABEL: &str = "Money worries";
/// Label preceding the learning topic line.
pub const TOPIC_LABEL: &str = "Wants to learn";
/// Label preceding the savings goal line.
pub const GOAL_LABEL: &str = "Savings goal";

/// Display summary of one [`Record`], as shown in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub icon: IconCategory,
    pub name: String,
    /// `"{age group} / {occupation}"`, with "unanswered" for a skipped occupation.
    pub subtitle: String,
    pub living_arrangement: String,
    pub financial_issue: String,
    /// Present only when the respondent wrote something.
    pub learning_topic: Option<String>,
    pub savings_goal: String,
    pub submitted_at: DateTime<Utc>,
}

impl Card {
    pub fn from_record(record: &Record) -> Self {
        let learning_topic = record.learning_topic();
        Self {
            icon: classify_household(record),
            name: record.name().to_string(),
            subtitle: format!(
                "{} / {}",
                record.age_group().label(),
                Occupation::label_or_unanswered(record.occupation())
            ),
            living_arrangement: LivingArrangement::join_labels(record.living_arrangement()),
            financial_issue: record.financial_issue().to_string(),
            learning_topic: (!learning_topic.is_empty()).then(|| learning_topic.to_string()),
            savings_goal: record.savings_goal().to_string(),
            submitted_at: record.submitted_at(),
        }
    }

    /// Labelled body rows, in display order. The learning topic row is
    /// omitted when empty.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![
            (LIVING_LABEL, self.living_arrangement.as_str()),
            (ISSUE_LABEL, self.financial_issue.as_str()),
        ];
        if let Some(topic) = &self.learning_topic {
            rows.push((TOPIC_LABEL, topic.as_str()));
        }
        rows.push((GOAL_LABEL, self.savings_goal.as_str()));
        rows
    }
}
