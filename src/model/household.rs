use std::fmt;

use super::living_arrangement::LivingArrangement;
use super::record::Record;

/// Icon shown on a feed card, derived from the living arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Solo,
    Couple,
    Family,
    Other,
}

impl IconCategory {
    /// Terminal glyph drawn in place of an icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Solo => "👤",
            IconCategory::Couple => "👥",
            IconCategory::Family => "🏠",
            IconCategory::Other => "💼",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IconCategory::Solo => "Solo",
            IconCategory::Couple => "Couple",
            IconCategory::Family => "Family",
            IconCategory::Other => "Other",
        }
    }
}

#[mutants::skip]
impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks the card icon for a record.
///
/// Rules are checked in order and the first hit wins: living alone, then
/// couple, then family of three or more. Anything else, including no
/// selection, is [`IconCategory::Other`].
pub fn classify_household(record: &Record) -> IconCategory {
    classify_arrangements(record.living_arrangement())
}

/// [`classify_household`] over a bare selection.
pub fn classify_arrangements(selection: &[LivingArrangement]) -> IconCategory {
    let has = |a: LivingArrangement| selection.contains(&a);
    if has(LivingArrangement::LivingAlone) {
        IconCategory::Solo
    } else if has(LivingArrangement::Couple) {
        IconCategory::Couple
    } else if has(LivingArrangement::ThreeOrMoreFamily) {
        IconCategory::Family
    } else {
        IconCategory::Other
    }
}
