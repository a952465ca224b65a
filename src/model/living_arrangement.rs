use std::fmt;
use std::str::FromStr;

use super::field::Field;
use super::validation::ValidationError;

/// Household arrangement. Several may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LivingArrangement {
    LivingAlone,
    Couple,
    ThreeOrMoreFamily,
    Other,
}

static ALL_LIVING_ARRANGEMENTS: &[LivingArrangement] = &[
    LivingArrangement::LivingAlone,
    LivingArrangement::Couple,
    LivingArrangement::ThreeOrMoreFamily,
    LivingArrangement::Other,
];

impl LivingArrangement {
    /// Returns the stable identifier used when parsing textual input.
    pub fn as_str(&self) -> &'static str {
        match self {
            LivingArrangement::LivingAlone => "living-alone",
            LivingArrangement::Couple => "couple",
            LivingArrangement::ThreeOrMoreFamily => "three-or-more-family",
            LivingArrangement::Other => "other",
        }
    }

    /// Returns the label shown on the form and on feed cards.
    pub fn label(&self) -> &'static str {
        match self {
            LivingArrangement::LivingAlone => "living alone",
            LivingArrangement::Couple => "couple",
            LivingArrangement::ThreeOrMoreFamily => "family of three or more",
            LivingArrangement::Other => "other",
        }
    }

    /// Returns all arrangements in checkbox order.
    pub fn all() -> &'static [LivingArrangement] {
        ALL_LIVING_ARRANGEMENTS
    }

    /// Joins labels with `", "`, preserving the order given.
    pub fn join_labels(selection: &[LivingArrangement]) -> String {
        selection
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for LivingArrangement {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                ValidationError::UnknownOption(Field::LivingArrangement, s.to_string())
            })
    }
}

#[mutants::skip]
impl fmt::Display for LivingArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
