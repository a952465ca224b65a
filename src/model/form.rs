use chrono::{DateTime, Utc};

use super::age_group::AgeGroup;
use super::field::Field;
use super::id::RecordId;
use super::living_arrangement::LivingArrangement;
use super::occupation::Occupation;
use super::record::Record;
use super::validation::{ValidationError, validate_age_group, validate_required_text};

/// The in-progress answer set for the next submission.
///
/// Mutators accept anything, including empty values. Required answers are
/// only checked when the form is frozen into a [`Record`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    name: String,
    age_group: Option<AgeGroup>,
    occupation: Option<Occupation>,
    living_arrangement: Vec<LivingArrangement>,
    financial_issue: String,
    learning_topic: String,
    savings_goal: String,
}

impl FormModel {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Selects `value`, replacing any previous choice.
    pub fn set_age_group(&mut self, value: AgeGroup) {
        self.age_group = Some(value);
    }

    /// Sets or clears the occupation.
    pub fn set_occupation(&mut self, value: Option<Occupation>) {
        self.occupation = value;
    }

    /// Adds `value` if absent, removes it if present.
    ///
    /// New selections are appended, so the list stays in selection order.
    pub fn toggle_living_arrangement(&mut self, value: LivingArrangement) {
        if let Some(pos) = self.living_arrangement.iter().position(|&a| a == value) {
            self.living_arrangement.remove(pos);
        } else {
            self.living_arrangement.push(value);
        }
    }

    pub fn set_financial_issue(&mut self, value: impl Into<String>) {
        self.financial_issue = value.into();
    }

    pub fn set_learning_topic(&mut self, value: impl Into<String>) {
        self.learning_topic = value.into();
    }

    pub fn set_savings_goal(&mut self, value: impl Into<String>) {
        self.savings_goal = value.into();
    }

    /// Sets a free-text field by identifier. Non-text fields are ignored.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Name => self.set_name(value),
            Field::FinancialIssue => self.set_financial_issue(value),
            Field::LearningTopic => self.set_learning_topic(value),
            Field::SavingsGoal => self.set_savings_goal(value),
            Field::AgeGroup | Field::Occupation | Field::LivingArrangement => {}
        }
    }

    /// Returns a free-text field by identifier, or `""` for non-text fields.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::FinancialIssue => &self.financial_issue,
            Field::LearningTopic => &self.learning_topic,
            Field::SavingsGoal => &self.savings_goal,
            Field::AgeGroup | Field::Occupation | Field::LivingArrangement => "",
        }
    }

    /// Clears every answer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns every required-field failure, in form order.
    pub fn validate(&self) -> Vec<ValidationError> {
        [
            validate_required_text(Field::Name, &self.name),
            validate_age_group(self.age_group).map(|_| ()),
            validate_required_text(Field::FinancialIssue, &self.financial_issue),
            validate_required_text(Field::SavingsGoal, &self.savings_goal),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// Freezes the current answers into a [`Record`]. The form is not modified.
    pub fn to_record(
        &self,
        id: RecordId,
        submitted_at: DateTime<Utc>,
    ) -> Result<Record, ValidationError> {
        Record::new(
            id,
            self.name.clone(),
            self.age_group,
            self.occupation,
            self.living_arrangement.clone(),
            self.financial_issue.clone(),
            self.learning_topic.clone(),
            self.savings_goal.clone(),
            submitted_at,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    pub fn occupation(&self) -> Option<Occupation> {
        self.occupation
    }

    pub fn living_arrangement(&self) -> &[LivingArrangement] {
        &self.living_arrangement
    }

    /// Returns `true` if `value` is currently ticked.
    pub fn has_living_arrangement(&self, value: LivingArrangement) -> bool {
        self.living_arrangement.contains(&value)
    }

    pub fn financial_issue(&self) -> &str {
        &self.financial_issue
    }

    pub fn learning_topic(&self) -> &str {
        &self.learning_topic
    }

    pub fn savings_goal(&self) -> &str {
        &self.savings_goal
    }
}
