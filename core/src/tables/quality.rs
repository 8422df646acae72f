//! Item quality (rarity) codes.

use serde::{Deserialize, Serialize};

use super::{exact_alias_match, numeric_code};

/// Item quality, ordered from lowest to highest code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Artifact,
    Heirloom,
}

const ALIASES: &[(&[&str], Quality)] = &[
    (&["p", "poor", "gray", "grey"], Quality::Poor),
    (&["c", "common", "white"], Quality::Common),
    (&["u", "uncommon", "green"], Quality::Uncommon),
    (&["r", "s", "rare", "superior", "blue"], Quality::Rare),
    (&["e", "epic", "purple"], Quality::Epic),
    (&["l", "legendary", "orange"], Quality::Legendary),
    (&["a", "artifact"], Quality::Artifact),
    (&["h", "heirloom"], Quality::Heirloom),
];

const ALL: [Quality; 8] = [
    Quality::Poor,
    Quality::Common,
    Quality::Uncommon,
    Quality::Rare,
    Quality::Epic,
    Quality::Legendary,
    Quality::Artifact,
    Quality::Heirloom,
];

impl Quality {
    /// Resolves a quality name, colour, one-letter alias or code `0..=7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_tooltip_core::Quality;
    ///
    /// assert_eq!(Quality::lookup("legendary"), Some(Quality::Legendary));
    /// assert_eq!(Quality::lookup("purple"), Some(Quality::Epic));
    /// assert_eq!(Quality::lookup("3"), Some(Quality::Rare));
    /// assert_eq!(Quality::lookup("shiny"), None);
    /// ```
    pub fn lookup(input: &str) -> Option<Self> {
        if let Some(code) = numeric_code(input) {
            return Self::from_code(code);
        }
        exact_alias_match(input, ALIASES)
    }

    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().and_then(|i| ALL.get(i).copied())
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Display name used by the `{{Quality}}` and `{{Loot}}` templates.
    pub fn name(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Artifact => "Artifact",
            Self::Heirloom => "Heirloom",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(Quality::lookup("Grey"), Some(Quality::Poor));
        assert_eq!(Quality::lookup("s"), Some(Quality::Rare));
        assert_eq!(Quality::lookup("superior"), Some(Quality::Rare));
        assert_eq!(Quality::lookup("H"), Some(Quality::Heirloom));
    }

    #[test]
    fn test_numeric_codes_in_range_only() {
        assert_eq!(Quality::lookup("0"), Some(Quality::Poor));
        assert_eq!(Quality::lookup("7"), Some(Quality::Heirloom));
        assert_eq!(Quality::lookup("8"), None);
        assert_eq!(Quality::lookup("-1"), None);
    }

    #[test]
    fn test_code_roundtrip() {
        for code in 0..8 {
            assert_eq!(Quality::from_code(code).map(Quality::code), Some(code));
        }
    }
}
