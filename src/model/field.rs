use std::fmt;

/// Identifies one question on the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    AgeGroup,
    Occupation,
    LivingArrangement,
    FinancialIssue,
    LearningTopic,
    SavingsGoal,
}

static ALL_FIELDS: &[Field] = &[
    Field::Name,
    Field::AgeGroup,
    Field::Occupation,
    Field::LivingArrangement,
    Field::FinancialIssue,
    Field::LearningTopic,
    Field::SavingsGoal,
];

impl Field {
    /// Returns every field in the order it appears on the form.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Question label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name (nickname is fine)",
            Field::AgeGroup => "Age group",
            Field::Occupation => "Occupation (optional)",
            Field::LivingArrangement => "Living arrangement",
            Field::FinancialIssue => "Money worries you have right now",
            Field::LearningTopic => "Savings topics you'd like to learn about",
            Field::SavingsGoal => "Concrete savings goal you want to reach",
        }
    }

    /// Example text shown under the label, if the question has one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Field::FinancialIssue => {
                Some("e.g. money runs out before payday, can't save, too much impulse buying")
            }
            Field::LearningTopic => Some("only if there is something in particular"),
            Field::SavingsGoal => {
                Some("e.g. save 500,000 yen in a year, cut the electricity bill by 20%")
            }
            _ => None,
        }
    }

    /// Whether submission is refused while this field is empty.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::Name | Field::AgeGroup | Field::FinancialIssue | Field::SavingsGoal
        )
    }

    /// Whether the field is edited as free text.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Field::Name | Field::FinancialIssue | Field::LearningTopic | Field::SavingsGoal
        )
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::AgeGroup => "age group",
            Field::Occupation => "occupation",
            Field::LivingArrangement => "living arrangement",
            Field::FinancialIssue => "money worries",
            Field::LearningTopic => "learning topic",
            Field::SavingsGoal => "savings goal",
        };
        f.write_str(name)
    }
}
