use std::fmt;
use std::str::FromStr;

use super::field::Field;
use super::validation::ValidationError;

/// Age band of the respondent. Exactly one is chosen per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Teens,
    Twenties,
    Thirties,
    Forties,
    FiftyAndAbove,
}

static ALL_AGE_GROUPS: &[AgeGroup] = &[
    AgeGroup::Teens,
    AgeGroup::Twenties,
    AgeGroup::Thirties,
    AgeGroup::Forties,
    AgeGroup::FiftyAndAbove,
];

impl AgeGroup {
    /// Returns the stable identifier used when parsing textual input.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Teens => "teens",
            AgeGroup::Twenties => "twenties",
            AgeGroup::Thirties => "thirties",
            AgeGroup::Forties => "forties",
            AgeGroup::FiftyAndAbove => "fifty-and-above",
        }
    }

    /// Returns the label shown on the form and on feed cards.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Teens => "teens",
            AgeGroup::Twenties => "twenties",
            AgeGroup::Thirties => "thirties",
            AgeGroup::Forties => "forties",
            AgeGroup::FiftyAndAbove => "fifty and above",
        }
    }

    /// Returns all age bands, youngest first.
    pub fn all() -> &'static [AgeGroup] {
        ALL_AGE_GROUPS
    }
}

impl FromStr for AgeGroup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOption(Field::AgeGroup, s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
