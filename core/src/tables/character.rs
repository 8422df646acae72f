//! Playable classes and races.
//!
//! Both tables are matched by fragment: `"pal"` is enough for a Paladin and
//! `"ne"` for a Night Elf. Codes follow the in-game class index and the
//! alphabetical race index.

use serde::{Deserialize, Serialize};

use super::{first_fragment_match, numeric_code};

/// A playable class, ordered by class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    DeathKnight,
    Paladin,
    Priest,
    Shaman,
    Druid,
    Rogue,
    Mage,
    Warlock,
    Hunter,
}

const CLASS_FRAGMENTS: &[(&[&str], PlayerClass)] = &[
    (&["warrior"], PlayerClass::Warrior),
    (&["dk", "de"], PlayerClass::DeathKnight),
    (&["pal"], PlayerClass::Paladin),
    (&["pr"], PlayerClass::Priest),
    (&["sh"], PlayerClass::Shaman),
    (&["dr"], PlayerClass::Druid),
    (&["ro"], PlayerClass::Rogue),
    (&["mag"], PlayerClass::Mage),
    (&["lock"], PlayerClass::Warlock),
    (&["hu"], PlayerClass::Hunter),
];

const ALL_CLASSES: [PlayerClass; 10] = [
    PlayerClass::Warrior,
    PlayerClass::DeathKnight,
    PlayerClass::Paladin,
    PlayerClass::Priest,
    PlayerClass::Shaman,
    PlayerClass::Druid,
    PlayerClass::Rogue,
    PlayerClass::Mage,
    PlayerClass::Warlock,
    PlayerClass::Hunter,
];

impl PlayerClass {
    /// Resolves a class fragment or class index `0..=9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_tooltip_core::PlayerClass;
    ///
    /// assert_eq!(PlayerClass::lookup("Death"), Some(PlayerClass::DeathKnight));
    /// assert_eq!(PlayerClass::lookup("Warlock,"), Some(PlayerClass::Warlock));
    /// assert_eq!(PlayerClass::lookup("9"), Some(PlayerClass::Hunter));
    /// ```
    pub fn lookup(input: &str) -> Option<Self> {
        if let Some(code) = numeric_code(input) {
            return Self::from_code(code);
        }
        first_fragment_match(input, CLASS_FRAGMENTS)
    }

    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().and_then(|i| ALL_CLASSES.get(i).copied())
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::DeathKnight => "Death Knight",
            Self::Paladin => "Paladin",
            Self::Priest => "Priest",
            Self::Shaman => "Shaman",
            Self::Druid => "Druid",
            Self::Rogue => "Rogue",
            Self::Mage => "Mage",
            Self::Warlock => "Warlock",
            Self::Hunter => "Hunter",
        }
    }
}

/// A playable race, ordered alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Race {
    BloodElf,
    Draenei,
    Dwarf,
    Gnome,
    Goblin,
    Human,
    NightElf,
    Orc,
    Tauren,
    Troll,
    Undead,
    Worgen,
}

// "or" precedes "wo": "Worgen" resolves to Orc. Existing pages rely on it.
const RACE_FRAGMENTS: &[(&[&str], Race)] = &[
    (&["bl", "be"], Race::BloodElf),
    (&["dr"], Race::Draenei),
    (&["dw"], Race::Dwarf),
    (&["gn"], Race::Gnome),
    (&["go"], Race::Goblin),
    (&["hu"], Race::Human),
    (&["ni", "ne"], Race::NightElf),
    (&["or"], Race::Orc),
    (&["ta"], Race::Tauren),
    (&["tr"], Race::Troll),
    (&["un", "fo"], Race::Undead),
    (&["wo"], Race::Worgen),
];

const ALL_RACES: [Race; 12] = [
    Race::BloodElf,
    Race::Draenei,
    Race::Dwarf,
    Race::Gnome,
    Race::Goblin,
    Race::Human,
    Race::NightElf,
    Race::Orc,
    Race::Tauren,
    Race::Troll,
    Race::Undead,
    Race::Worgen,
];

impl Race {
    /// Resolves a race fragment or race index `0..=11`.
    pub fn lookup(input: &str) -> Option<Self> {
        if let Some(code) = numeric_code(input) {
            return Self::from_code(code);
        }
        first_fragment_match(input, RACE_FRAGMENTS)
    }

    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().and_then(|i| ALL_RACES.get(i).copied())
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BloodElf => "Blood Elf",
            Self::Draenei => "Draenei",
            Self::Dwarf => "Dwarf",
            Self::Gnome => "Gnome",
            Self::Goblin => "Goblin",
            Self::Human => "Human",
            Self::NightElf => "Night Elf",
            Self::Orc => "Orc",
            Self::Tauren => "Tauren",
            Self::Troll => "Troll",
            Self::Undead => "Undead",
            Self::Worgen => "Worgen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_fragments() {
        assert_eq!(PlayerClass::lookup("Warrior"), Some(PlayerClass::Warrior));
        assert_eq!(PlayerClass::lookup("dk"), Some(PlayerClass::DeathKnight));
        assert_eq!(PlayerClass::lookup("Paladin,"), Some(PlayerClass::Paladin));
        assert_eq!(PlayerClass::lookup("priest"), Some(PlayerClass::Priest));
        assert_eq!(PlayerClass::lookup("Shaman"), Some(PlayerClass::Shaman));
        assert_eq!(PlayerClass::lookup("druid"), Some(PlayerClass::Druid));
        assert_eq!(PlayerClass::lookup("Rogue"), Some(PlayerClass::Rogue));
        assert_eq!(PlayerClass::lookup("mage"), Some(PlayerClass::Mage));
        assert_eq!(PlayerClass::lookup("Hunter"), Some(PlayerClass::Hunter));
        assert_eq!(PlayerClass::lookup("Monk"), None);
    }

    #[test]
    fn test_class_codes() {
        assert_eq!(PlayerClass::lookup("1"), Some(PlayerClass::DeathKnight));
        assert_eq!(PlayerClass::lookup("10"), None);
        assert_eq!(PlayerClass::Hunter.code(), 9);
    }

    #[test]
    fn test_race_fragments() {
        assert_eq!(Race::lookup("Blood"), Some(Race::BloodElf));
        assert_eq!(Race::lookup("Draenei"), Some(Race::Draenei));
        assert_eq!(Race::lookup("Dwarf,"), Some(Race::Dwarf));
        assert_eq!(Race::lookup("Gnome"), Some(Race::Gnome));
        assert_eq!(Race::lookup("gob"), Some(Race::Goblin));
        assert_eq!(Race::lookup("Human"), Some(Race::Human));
        assert_eq!(Race::lookup("Night"), Some(Race::NightElf));
        assert_eq!(Race::lookup("Orc"), Some(Race::Orc));
        assert_eq!(Race::lookup("Tauren"), Some(Race::Tauren));
        assert_eq!(Race::lookup("Troll"), Some(Race::Troll));
        assert_eq!(Race::lookup("Undead"), Some(Race::Undead));
        assert_eq!(Race::lookup("fo"), Some(Race::Undead));
    }

    #[test]
    fn test_overlapping_fragments_keep_table_order() {
        // "bl" in "goblin" and "or" in "forsaken" win over the later entries.
        assert_eq!(Race::lookup("Goblin"), Some(Race::BloodElf));
        assert_eq!(Race::lookup("Forsaken"), Some(Race::Orc));
    }

    #[test]
    fn test_worgen_resolves_to_orc() {
        assert_eq!(Race::lookup("Worgen"), Some(Race::Orc));
        assert_eq!(Race::lookup("wo"), Some(Race::Worgen));
        assert_eq!(Race::lookup("11"), Some(Race::Worgen));
    }
}
