//! Requirement vocabularies: reputation standings, professions,
//! specializations and world-event holidays.

use serde::{Deserialize, Serialize};

use super::{exact_alias_match, first_fragment_match, numeric_code};

/// Reputation standing, ordered by standing id (`1..=8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Standing {
    Hated,
    Hostile,
    Unfriendly,
    Neutral,
    Friendly,
    Honored,
    Revered,
    Exalted,
}

const STANDING_ALIASES: &[(&[&str], Standing)] = &[
    (&["hated"], Standing::Hated),
    (&["hostile"], Standing::Hostile),
    (&["unfriendly", "u"], Standing::Unfriendly),
    (&["neutral", "n"], Standing::Neutral),
    (&["friendly", "f"], Standing::Friendly),
    (&["honored", "h"], Standing::Honored),
    (&["revered", "r"], Standing::Revered),
    (&["exalted", "e"], Standing::Exalted),
];

const ALL_STANDINGS: [Standing; 8] = [
    Standing::Hated,
    Standing::Hostile,
    Standing::Unfriendly,
    Standing::Neutral,
    Standing::Friendly,
    Standing::Honored,
    Standing::Revered,
    Standing::Exalted,
];

impl Standing {
    pub fn lookup(input: &str) -> Option<Self> {
        if let Some(code) = numeric_code(input) {
            return Self::from_id(code);
        }
        exact_alias_match(input, STANDING_ALIASES)
    }

    pub fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id - 1)
            .ok()
            .and_then(|i| ALL_STANDINGS.get(i).copied())
    }

    pub fn id(self) -> i32 {
        self as i32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hated => "Hated",
            Self::Hostile => "Hostile",
            Self::Unfriendly => "Unfriendly",
            Self::Neutral => "Neutral",
            Self::Friendly => "Friendly",
            Self::Honored => "Honored",
            Self::Revered => "Revered",
            Self::Exalted => "Exalted",
        }
    }
}

/// Primary and secondary professions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    Alchemy,
    Archaeology,
    Blacksmithing,
    Enchanting,
    Engineering,
    FirstAid,
    Fishing,
    Herbalism,
    Inscription,
    Jewelcrafting,
    Leatherworking,
    Lockpicking,
    Mining,
    Reforging,
    Riding,
    Runeforging,
    Skinning,
    Tailoring,
}

const PROFESSION_FRAGMENTS: &[(&[&str], Profession)] = &[
    (&["alc"], Profession::Alchemy),
    (&["arc"], Profession::Archaeology),
    (&["bla"], Profession::Blacksmithing),
    (&["enc"], Profession::Enchanting),
    (&["eng"], Profession::Engineering),
    (&["aid", "fir"], Profession::FirstAid),
    (&["fis"], Profession::Fishing),
    (&["her"], Profession::Herbalism),
    (&["ins"], Profession::Inscription),
    (&["jew"], Profession::Jewelcrafting),
    (&["lea"], Profession::Leatherworking),
    (&["loc"], Profession::Lockpicking),
    (&["min"], Profession::Mining),
    (&["ref"], Profession::Reforging),
    (&["rid"], Profession::Riding),
    (&["run"], Profession::Runeforging),
    (&["ski"], Profession::Skinning),
    (&["tai"], Profession::Tailoring),
];

impl Profession {
    pub fn lookup(input: &str) -> Option<Self> {
        first_fragment_match(input, PROFESSION_FRAGMENTS)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Alchemy => "Alchemy",
            Self::Archaeology => "Archaeology",
            Self::Blacksmithing => "Blacksmithing",
            Self::Enchanting => "Enchanting",
            Self::Engineering => "Engineering",
            Self::FirstAid => "First Aid",
            Self::Fishing => "Fishing",
            Self::Herbalism => "Herbalism",
            Self::Inscription => "Inscription",
            Self::Jewelcrafting => "Jewelcrafting",
            Self::Leatherworking => "Leatherworking",
            Self::Lockpicking => "Lockpicking",
            Self::Mining => "Mining",
            Self::Reforging => "Reforging",
            Self::Riding => "Riding",
            Self::Runeforging => "Runeforging",
            Self::Skinning => "Skinning",
            Self::Tailoring => "Tailoring",
        }
    }
}

/// Profession specializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    GnomishEngineering,
    GoblinEngineering,
    Armorsmithing,
    Axesmithing,
    Hammersmithing,
    Swordsmithing,
    PotionMaster,
    ElixirMaster,
    TransmuteMaster,
    ElementalLeatherworking,
    DragonscaleLeatherworking,
    TribalLeatherworking,
}

const SPECIALIZATION_FRAGMENTS: &[(&[&str], Specialization)] = &[
    (&["gno"], Specialization::GnomishEngineering),
    (&["gob"], Specialization::GoblinEngineering),
    (&["arm"], Specialization::Armorsmithing),
    (&["axe"], Specialization::Axesmithing),
    (&["ham"], Specialization::Hammersmithing),
    (&["swo"], Specialization::Swordsmithing),
    (&["pot"], Specialization::PotionMaster),
    (&["eli"], Specialization::ElixirMaster),
    (&["tra"], Specialization::TransmuteMaster),
    (&["ele"], Specialization::ElementalLeatherworking),
    (&["dra"], Specialization::DragonscaleLeatherworking),
    (&["tri"], Specialization::TribalLeatherworking),
];

impl Specialization {
    pub fn lookup(input: &str) -> Option<Self> {
        first_fragment_match(input, SPECIALIZATION_FRAGMENTS)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GnomishEngineering => "Gnomish Engineering",
            Self::GoblinEngineering => "Goblin Engineering",
            Self::Armorsmithing => "Armorsmithing",
            Self::Axesmithing => "Axesmithing",
            Self::Hammersmithing => "Hammersmithing",
            Self::Swordsmithing => "Swordsmithing",
            Self::PotionMaster => "Potion Master",
            Self::ElixirMaster => "Elixir Master",
            Self::TransmuteMaster => "Transmute Master",
            Self::ElementalLeatherworking => "Elemental Leatherworking",
            Self::DragonscaleLeatherworking => "Dragonscale Leatherworking",
            Self::TribalLeatherworking => "Tribal Leatherworking",
        }
    }
}

/// World events with event-limited items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holiday {
    LoveIsInTheAir,
    Noblegarden,
    ChildrensWeek,
    Midsummer,
    Brewfest,
    HallowsEnd,
    PilgrimsBounty,
    WinterVeil,
}

const HOLIDAY_FRAGMENTS: &[(&[&str], Holiday)] = &[
    (&["lov"], Holiday::LoveIsInTheAir),
    (&["nob"], Holiday::Noblegarden),
    (&["chi"], Holiday::ChildrensWeek),
    (&["mid"], Holiday::Midsummer),
    (&["bre"], Holiday::Brewfest),
    (&["hal"], Holiday::HallowsEnd),
    (&["pil"], Holiday::PilgrimsBounty),
    (&["win"], Holiday::WinterVeil),
];

impl Holiday {
    pub fn lookup(input: &str) -> Option<Self> {
        first_fragment_match(input, HOLIDAY_FRAGMENTS)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LoveIsInTheAir => "Love is in the Air",
            Self::Noblegarden => "Noblegarden",
            Self::ChildrensWeek => "Children's Week",
            Self::Midsummer => "Midsummer",
            Self::Brewfest => "Brewfest",
            Self::HallowsEnd => "Hallow's End",
            Self::PilgrimsBounty => "Pilgrim's Bounty",
            Self::WinterVeil => "Winter Veil",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_aliases_and_ids() {
        assert_eq!(Standing::lookup("Exalted").map(Standing::id), Some(8));
        assert_eq!(Standing::lookup("r"), Some(Standing::Revered));
        assert_eq!(Standing::lookup("1"), Some(Standing::Hated));
        assert_eq!(Standing::lookup("9"), None);
        assert_eq!(Standing::lookup("0"), None);
        assert_eq!(Standing::lookup("Legion"), None);
    }

    #[test]
    fn test_profession_fragments() {
        assert_eq!(Profession::lookup("Blacksmithing"), Some(Profession::Blacksmithing));
        assert_eq!(Profession::lookup("first"), Some(Profession::FirstAid));
        assert_eq!(Profession::lookup("Tailoring"), Some(Profession::Tailoring));
        assert_eq!(Profession::lookup("Cooking"), None);
    }

    #[test]
    fn test_specialization_fragments() {
        assert_eq!(
            Specialization::lookup("Gnomish"),
            Some(Specialization::GnomishEngineering)
        );
        assert_eq!(
            Specialization::lookup("Tribal"),
            Some(Specialization::TribalLeatherworking)
        );
        assert_eq!(Specialization::lookup("Mining"), None);
    }

    #[test]
    fn test_holiday_fragments() {
        assert_eq!(Holiday::lookup("Brewfest"), Some(Holiday::Brewfest));
        assert_eq!(Holiday::lookup("winter"), Some(Holiday::WinterVeil));
        assert_eq!(Holiday::HallowsEnd.name(), "Hallow's End");
        assert_eq!(Holiday::lookup("Level"), None);
    }
}
