use std::fmt;
use std::str::FromStr;

use super::field::Field;
use super::validation::ValidationError;

/// Occupation category. Answering is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupation {
    Employee,
    SelfEmployed,
    CivilServant,
    Student,
    Homemaker,
    Unemployed,
    Other,
}

static ALL_OCCUPATIONS: &[Occupation] = &[
    Occupation::Employee,
    Occupation::SelfEmployed,
    Occupation::CivilServant,
    Occupation::Student,
    Occupation::Homemaker,
    Occupation::Unemployed,
    Occupation::Other,
];

/// Placeholder shown wherever an occupation was left unanswered.
pub const UNANSWERED: &str = "unanswered";

impl Occupation {
    /// Returns the stable identifier used when parsing textual input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Employee => "employee",
            Occupation::SelfEmployed => "self-employed",
            Occupation::CivilServant => "civil-servant",
            Occupation::Student => "student",
            Occupation::Homemaker => "homemaker",
            Occupation::Unemployed => "unemployed",
            Occupation::Other => "other",
        }
    }

    /// Returns the label shown on the form and on feed cards.
    pub fn label(&self) -> &'static str {
        match self {
            Occupation::Employee => "employee",
            Occupation::SelfEmployed => "self-employed",
            Occupation::CivilServant => "civil servant",
            Occupation::Student => "student",
            Occupation::Homemaker => "homemaker",
            Occupation::Unemployed => "unemployed",
            Occupation::Other => "other",
        }
    }

    /// Returns all occupations in dropdown order.
    pub fn all() -> &'static [Occupation] {
        ALL_OCCUPATIONS
    }

    /// Label for an optional answer, falling back to [`UNANSWERED`].
    pub fn label_or_unanswered(occupation: Option<Occupation>) -> &'static str {
        occupation.map_or(UNANSWERED, |o| o.label())
    }

    /// Steps through `None` followed by every occupation, wrapping around.
    ///
    /// This is the dropdown's value sequence: unset is a valid stop.
    pub fn cycle(current: Option<Occupation>, forward: bool) -> Option<Occupation> {
        let all = Self::all();
        // Position 0 is "unset", 1..=len map onto `all`.
        let stops = all.len() + 1;
        let pos = current
            .and_then(|o| all.iter().position(|&x| x == o))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (pos + 1) % stops
        } else {
            (pos + stops - 1) % stops
        };
        next.checked_sub(1).map(|i| all[i])
    }
}

impl FromStr for Occupation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOption(Field::Occupation, s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_7_occupations() {
        assert_eq!(Occupation::all().len(), 7);
        assert_eq!(Occupation::all().first(), Some(&Occupation::Employee));
        assert_eq!(Occupation::all().last(), Some(&Occupation::Other));
    }

    #[test]
    fn parses_every_identifier() {
        for occupation in Occupation::all() {
            assert_eq!(occupation.as_str().parse::<Occupation>(), Ok(*occupation));
        }
    }

    #[test]
    fn parse_rejects_label_with_space() {
        assert_eq!(
            "civil servant".parse::<Occupation>(),
            Err(ValidationError::UnknownOption(
                Field::Occupation,
                "civil servant".to_string()
            ))
        );
    }

    #[test]
    fn unanswered_placeholder() {
        assert_eq!(Occupation::label_or_unanswered(None), "unanswered");
        assert_eq!(
            Occupation::label_or_unanswered(Some(Occupation::Student)),
            "student"
        );
    }

    mod cycle {
        use super::*;

        #[test]
        fn forward_from_unset_selects_first() {
            assert_eq!(Occupation::cycle(None, true), Some(Occupation::Employee));
        }

        #[test]
        fn forward_from_last_returns_to_unset() {
            assert_eq!(Occupation::cycle(Some(Occupation::Other), true), None);
        }

        #[test]
        fn backward_from_unset_selects_last() {
            assert_eq!(Occupation::cycle(None, false), Some(Occupation::Other));
        }

        #[test]
        fn backward_from_first_returns_to_unset() {
            assert_eq!(Occupation::cycle(Some(Occupation::Employee), false), None);
        }

        #[test]
        fn full_forward_lap_returns_to_start() {
            let mut current = Some(Occupation::Student);
            for _ in 0..=Occupation::all().len() {
                current = Occupation::cycle(current, true);
            }
            assert_eq!(current, Some(Occupation::Student));
        }
    }
}
