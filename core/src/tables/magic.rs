//! Magic schools.

use serde::{Deserialize, Serialize};

use super::{exact_alias_match, numeric_code};

/// Damage/resistance school, ordered by school id (`1..=7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum School {
    Physical,
    Holy,
    Fire,
    Nature,
    Frost,
    Shadow,
    Arcane,
}

// Physical is never written out on a tooltip, so it has no textual alias.
const ALIASES: &[(&[&str], School)] = &[
    (&["arcane"], School::Arcane),
    (&["fire"], School::Fire),
    (&["frost"], School::Frost),
    (&["holy"], School::Holy),
    (&["nature"], School::Nature),
    (&["shadow"], School::Shadow),
];

const ALL: [School; 7] = [
    School::Physical,
    School::Holy,
    School::Fire,
    School::Nature,
    School::Frost,
    School::Shadow,
    School::Arcane,
];

impl School {
    /// Resolves a school name or school id.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_tooltip_core::School;
    ///
    /// assert_eq!(School::lookup("Frost").map(School::id), Some(5));
    /// assert_eq!(School::lookup("1"), Some(School::Physical));
    /// assert_eq!(School::lookup("physical"), None);
    /// ```
    pub fn lookup(input: &str) -> Option<Self> {
        if let Some(code) = numeric_code(input) {
            return Self::from_id(code);
        }
        exact_alias_match(input, ALIASES)
    }

    pub fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id - 1).ok().and_then(|i| ALL.get(i).copied())
    }

    pub fn id(self) -> i32 {
        self as i32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Holy => "Holy",
            Self::Fire => "Fire",
            Self::Nature => "Nature",
            Self::Frost => "Frost",
            Self::Shadow => "Shadow",
            Self::Arcane => "Arcane",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_ids() {
        assert_eq!(School::lookup("holy").map(School::id), Some(2));
        assert_eq!(School::lookup("Fire").map(School::id), Some(3));
        assert_eq!(School::lookup("NATURE").map(School::id), Some(4));
        assert_eq!(School::lookup("shadow").map(School::id), Some(6));
        assert_eq!(School::lookup("arcane").map(School::id), Some(7));
    }

    #[test]
    fn test_numeric_range() {
        assert_eq!(School::lookup("0"), None);
        assert_eq!(School::lookup("7"), Some(School::Arcane));
        assert_eq!(School::lookup("8"), None);
    }

    #[test]
    fn test_non_school_words() {
        assert_eq!(School::lookup("Damage"), None);
        assert_eq!(School::lookup(""), None);
    }
}
