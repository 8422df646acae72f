//! Item record types.
//!
//! Two shapes describe one item:
//!
//! - [`AttributeRecord`] is the mutable draft. The line classifier and the
//!   override merger both write into it; every field is optional and numeric
//!   text that needs cross-field checks (`id`, `ilvl`, weapon values) is kept
//!   raw.
//! - [`Item`] is the finalized form produced by
//!   [`finalize`](crate::finalize). Mandatory fields are plain values and
//!   grouped fields (weapon, recipe, sockets, ...) only exist as complete
//!   sub-records, so renderers never re-check presence.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tables::{
    BagType, BindType, GlyphType, Holiday, ItemType, PlayerClass, Profession, Quality, Race,
    School, Slot, SocketColor, Specialization, Standing,
};

/// Numeric text kept exactly as written.
///
/// Tooltips are re-rendered verbatim, so `"2.60"` stays `"2.60"` instead of
/// round-tripping through a float.
///
/// # Examples
///
/// ```
/// use item_tooltip_core::Number;
///
/// let speed = Number::parse(" 2.60 ").unwrap();
/// assert_eq!(speed.as_str(), "2.60");
/// assert_eq!(speed.value(), 2.6);
/// assert!(Number::parse("fast").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(String);

impl Number {
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        is_numeric(trimmed).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or_default()
    }

    pub fn is_one(&self) -> bool {
        self.value() == 1.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` for decimal numbers such as `12`, `-3`, `+15`, `2.60`, `1e3`.
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty()
        && text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && text.parse::<f64>().is_ok()
}

/// Low/high ends of a damage range before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRange {
    pub low: Option<String>,
    pub high: Option<String>,
}

impl RawRange {
    pub fn new(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: Some(low.into()),
            high: Some(high.into()),
        }
    }
}

/// Vendor sell price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellPrice {
    /// Coin amounts read from a `Sell Price: 1g 20s 5c` line.
    Coins {
        gold: Option<String>,
        silver: Option<String>,
        copper: Option<String>,
    },
    /// Free text supplied as an override.
    Text(String),
}

impl SellPrice {
    /// Wiki markup for the price.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_tooltip_core::SellPrice;
    ///
    /// let price = SellPrice::Coins {
    ///     gold: Some("1".into()),
    ///     silver: None,
    ///     copper: Some("5".into()),
    /// };
    /// assert_eq!(price.markup(), "{{cost|1||5}}");
    /// ```
    pub fn markup(&self) -> String {
        match self {
            Self::Coins {
                gold,
                silver,
                copper,
            } => {
                let mut out = String::from("{{cost|");
                out.push_str(gold.as_deref().unwrap_or(""));
                out.push('|');
                if let Some(silver) = silver {
                    out.push_str(silver);
                }
                if let Some(copper) = copper {
                    out.push('|');
                    out.push_str(copper);
                }
                out.push_str("}}");
                out
            }
            Self::Text(text) => text.clone(),
        }
    }
}

/// Input the engine could not place, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum Residue {
    /// A tooltip body line no rule recognized.
    Line { text: String },
    /// An override argument with an unknown key.
    Argument { key: String, value: String },
}

impl Residue {
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line { text } => f.write_str(text),
            Self::Argument { key, value } => write!(f, "{key}: {value}"),
        }
    }
}

/// The five primary attributes, in tooltip order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryStat {
    Strength,
    Agility,
    Stamina,
    Intellect,
    Spirit,
}

impl PrimaryStat {
    pub const ALL: [PrimaryStat; 5] = [
        PrimaryStat::Strength,
        PrimaryStat::Agility,
        PrimaryStat::Stamina,
        PrimaryStat::Intellect,
        PrimaryStat::Spirit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Stamina => "Stamina",
            Self::Intellect => "Intellect",
            Self::Spirit => "Spirit",
        }
    }
}

/// Fixed "Equip: Increases ..." bonuses, in tooltip order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Defense,
    Dodge,
    Parry,
    ShieldBlock,
    Haste,
    Hit,
    Crit,
    Resilience,
    Expertise,
    AttackPower,
    ManaPerFive,
    ArmorPenetration,
    SpellPower,
}

impl Rating {
    pub const ALL: [Rating; 13] = [
        Rating::Defense,
        Rating::Dodge,
        Rating::Parry,
        Rating::ShieldBlock,
        Rating::Haste,
        Rating::Hit,
        Rating::Crit,
        Rating::Resilience,
        Rating::Expertise,
        Rating::AttackPower,
        Rating::ManaPerFive,
        Rating::ArmorPenetration,
        Rating::SpellPower,
    ];

    /// Canonical override key for this rating.
    pub fn key(self) -> &'static str {
        match self {
            Self::Defense => "defense",
            Self::Dodge => "dodge",
            Self::Parry => "parry",
            Self::ShieldBlock => "blockrating",
            Self::Haste => "haste",
            Self::Hit => "hit",
            Self::Crit => "crit",
            Self::Resilience => "resilience",
            Self::Expertise => "expertise",
            Self::AttackPower => "ap",
            Self::ManaPerFive => "mp5",
            Self::ArmorPenetration => "arp",
            Self::SpellPower => "spellpower",
        }
    }

    /// Property name used in the metadata export line.
    pub fn export_name(self) -> &'static str {
        match self {
            Self::Defense => "Defense rating",
            Self::Dodge => "Dodge rating",
            Self::Parry => "Parry rating",
            Self::ShieldBlock => "Block rating",
            Self::Haste => "Haste rating",
            Self::Hit => "Hit rating",
            Self::Crit => "Critical strike rating",
            Self::Resilience => "Resilience rating",
            Self::Expertise => "Expertise rating",
            Self::AttackPower => "Attack power",
            Self::ManaPerFive => "Mana regeneration",
            Self::ArmorPenetration => "Armor penetration rating",
            Self::SpellPower => "Spell power",
        }
    }
}

/// Draft attribute record, filled by the classifier and the override merger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeRecord {
    pub name: Option<String>,
    pub id: Option<String>,
    pub ilvl: Option<String>,
    pub itempage: Option<String>,
    pub icon: Option<String>,
    pub stack: Option<Number>,
    pub quality: Option<Quality>,

    pub heroic: bool,
    pub conjured: bool,
    pub questitem: bool,
    pub locked: bool,
    pub read: bool,
    pub open: bool,

    pub holiday: Option<Holiday>,
    pub locationbind: Option<String>,
    pub bind: Option<BindType>,
    pub unique: bool,
    pub unique_n: Option<Number>,
    pub unique_eq: bool,
    pub unique_eq_n: Option<String>,
    pub glyph: Option<GlyphType>,
    pub duration: Option<String>,
    pub qbegin: Option<String>,
    pub item_type: Option<ItemType>,
    pub slot: Option<Slot>,

    pub speed: Option<String>,
    pub dmg: Option<RawRange>,
    pub damage_school: Option<School>,
    pub dps: Option<String>,
    pub bdmg: Option<RawRange>,
    pub bonus_damage_school: Option<School>,

    pub armor: Option<Number>,
    pub block: Option<Number>,
    pub stats: BTreeMap<PrimaryStat, Number>,
    pub resist: BTreeMap<School, Number>,
    pub socket: Vec<SocketColor>,
    pub sockbonus: Option<String>,
    pub durability: Option<Number>,
    pub lockpick: Option<Number>,
    pub bagslots: Option<Number>,
    pub bagtype: Option<BagType>,

    pub class: BTreeSet<PlayerClass>,
    pub race: BTreeSet<Race>,
    pub level: Option<Number>,
    pub subskill: Option<Specialization>,
    pub skill: Option<Profession>,
    pub skillrating: Option<Number>,
    pub faction: Option<String>,
    pub factionrating: Option<Standing>,
    pub arena: Option<Number>,

    pub onhit: Vec<String>,
    pub ratings: BTreeMap<Rating, Number>,
    pub equip: Vec<String>,
    pub use_effects: Vec<String>,

    pub create: Option<String>,
    pub createq: Option<Quality>,
    pub reagents: Option<String>,
    pub charges: Option<Number>,
    pub flavor: Option<String>,
    pub set: Option<String>,
    pub setpieces: Option<Number>,
    pub setpage: Option<String>,
    pub sell: Option<SellPrice>,

    pub undef: Vec<Residue>,
}

impl AttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record holding only an item name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Uniqueness marker; the four forms are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Uniqueness {
    /// `Unique`
    Unique,
    /// `Unique (N)`
    Limited(Number),
    /// `Unique-Equipped`
    Equipped,
    /// `Unique-Equipped: <category>` or `Unique-Equipped (N)`
    EquippedLimited(String),
}

/// Lock state of a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockState {
    Locked,
    /// Requires the given lockpicking skill.
    Lockpicking(Number),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    pub low: Number,
    pub high: Number,
    pub school: Option<School>,
}

/// Complete weapon block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub speed: Number,
    pub damage: Damage,
    pub dps: Number,
    pub bonus: Option<Damage>,
    /// Feral attack power granted to druids, rounded to two decimals.
    pub feral_attack_power: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sockets {
    pub colors: Vec<SocketColor>,
    pub bonus: String,
}

impl Sockets {
    /// Socket counts indexed by [`SocketColor::index`].
    pub fn counts(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for color in &self.colors {
            counts[color.index()] += 1;
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    pub slots: Number,
    pub kind: Option<BagType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionRequirement {
    pub profession: Profession,
    pub rating: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationRequirement {
    pub faction: String,
    pub standing: Standing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub creates: String,
    pub quality: Quality,
    pub reagents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMembership {
    pub name: String,
    pub page: String,
    pub pieces: Number,
}

/// A validated item, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub id: Number,
    pub ilvl: Number,
    pub itempage: String,
    pub icon: String,
    pub stack: Option<Number>,
    pub quality: Quality,

    pub heroic: bool,
    pub conjured: bool,
    pub questitem: bool,
    pub read: bool,
    pub open: bool,

    pub holiday: Option<Holiday>,
    pub locationbind: Option<String>,
    pub bind: Option<BindType>,
    pub uniqueness: Option<Uniqueness>,
    pub glyph: Option<GlyphType>,
    pub duration: Option<String>,
    pub qbegin: Option<String>,
    pub item_type: Option<ItemType>,
    pub slot: Option<Slot>,
    pub weapon: Option<Weapon>,

    pub armor: Option<Number>,
    pub block: Option<Number>,
    pub stats: BTreeMap<PrimaryStat, Number>,
    pub resist: BTreeMap<School, Number>,
    pub sockets: Option<Sockets>,
    pub durability: Option<Number>,
    pub lock: Option<LockState>,
    pub bag: Option<Bag>,

    pub classes: BTreeSet<PlayerClass>,
    pub races: BTreeSet<Race>,
    pub level: Option<Number>,
    pub subskill: Option<Specialization>,
    pub profession: Option<ProfessionRequirement>,
    pub reputation: Option<ReputationRequirement>,
    pub arena: Option<Number>,

    pub onhit: Vec<String>,
    pub ratings: BTreeMap<Rating, Number>,
    pub equip: Vec<String>,
    pub use_effects: Vec<String>,
    pub recipe: Option<Recipe>,
    pub charges: Option<Number>,
    pub flavor: Option<String>,
    pub set: Option<SetMembership>,
    pub sell: Option<SellPrice>,

    pub undef: Vec<Residue>,
}

impl Item {
    pub fn is_weapon(&self) -> bool {
        self.weapon.is_some()
    }

    pub fn has_bonus_damage(&self) -> bool {
        self.weapon.as_ref().is_some_and(|w| w.bonus.is_some())
    }

    pub fn is_recipe(&self) -> bool {
        self.recipe.is_some()
    }

    pub fn is_socketed(&self) -> bool {
        self.sockets.is_some()
    }

    pub fn requires_reputation(&self) -> bool {
        self.reputation.is_some()
    }

    pub fn requires_profession(&self) -> bool {
        self.profession.is_some()
    }

    pub fn is_set_piece(&self) -> bool {
        self.set.is_some()
    }
}
