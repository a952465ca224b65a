use thiserror::Error;

use super::age_group::AgeGroup;
use super::field::Field;

/// Validation errors for survey answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),
    #[error("unknown {0} option: {1}")]
    UnknownOption(Field, String),
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) | ValidationError::UnknownOption(field, _) => *field,
        }
    }
}

/// Validates a required free-text answer: must be non-empty.
///
/// Whitespace counts as content, matching a browser's `required` check.
pub fn validate_required_text(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Validates that an age group has been chosen.
pub fn validate_age_group(age_group: Option<AgeGroup>) -> Result<AgeGroup, ValidationError> {
    age_group.ok_or(ValidationError::Required(Field::AgeGroup))
}
