use chrono::{DateTime, Utc};

use super::age_group::AgeGroup;
use super::field::Field;
use super::id::RecordId;
use super::living_arrangement::LivingArrangement;
use super::occupation::Occupation;
use super::validation::{ValidationError, validate_age_group, validate_required_text};

/// One submitted survey. Immutable once created; fields are read through
/// accessors only.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    name: String,
    age_group: AgeGroup,
    occupation: Option<Occupation>,
    living_arrangement: Vec<LivingArrangement>,
    financial_issue: String,
    learning_topic: String,
    savings_goal: String,
    submitted_at: DateTime<Utc>,
}

impl Record {
    /// Creates a record, validating every required answer.
    ///
    /// The first failing field, in form order, is reported.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        name: String,
        age_group: Option<AgeGroup>,
        occupation: Option<Occupation>,
        living_arrangement: Vec<LivingArrangement>,
        financial_issue: String,
        learning_topic: String,
        savings_goal: String,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        validate_required_text(Field::Name, &name)?;
        let age_group = validate_age_group(age_group)?;
        validate_required_text(Field::FinancialIssue, &financial_issue)?;
        validate_required_text(Field::SavingsGoal, &savings_goal)?;
        Ok(Self {
            id,
            name,
            age_group,
            occupation,
            living_arrangement,
            financial_issue,
            learning_topic,
            savings_goal,
            submitted_at,
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    /// `None` when the respondent skipped the question.
    pub fn occupation(&self) -> Option<Occupation> {
        self.occupation
    }

    /// Selected arrangements in the order they were ticked.
    pub fn living_arrangement(&self) -> &[LivingArrangement] {
        &self.living_arrangement
    }

    pub fn financial_issue(&self) -> &str {
        &self.financial_issue
    }

    /// May be empty.
    pub fn learning_topic(&self) -> &str {
        &self.learning_topic
    }

    pub fn savings_goal(&self) -> &str {
        &self.savings_goal
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
