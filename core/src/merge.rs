//! Explicit key/value overrides.
//!
//! Page authors can set any attribute directly (`<item id=50783 q=legendary>`).
//! [`apply_overrides`] merges those arguments into a draft record. Each key
//! is escaped, lower-cased and resolved through [`OverrideField::from_key`],
//! which accepts the short aliases authors actually type (`a` for armor,
//! `sta` for stamina, ...). Overrides always replace values read from the
//! tooltip body.
//!
//! Unknown keys are not errors: they are kept as [`Residue::Argument`]
//! entries.
//!
//! # Example
//!
//! ```
//! use item_tooltip_core::*;
//!
//! let mut record = AttributeRecord::named("Hearthstone");
//! apply_overrides(&mut record, [("ID", "6948"), ("q", "common"), ("sparkle", "yes")]).unwrap();
//!
//! assert_eq!(record.id.as_deref(), Some("6948"));
//! assert_eq!(record.quality, Some(Quality::Common));
//! assert_eq!(record.undef[0].to_string(), "sparkle: yes");
//! ```

use tracing::debug;

use crate::error::{Result, ValueError};
use crate::tables::{
    BagType, BindType, GlyphType, Holiday, ItemType, PlayerClass, Profession, Quality, Race,
    School, Slot, SocketColor, Specialization, Standing,
};
use crate::text::{capitalize_first, escape_html, title_case};
use crate::types::{AttributeRecord, Number, PrimaryStat, Rating, RawRange, Residue, SellPrice};

/// Canonical attribute selected by an override key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideField {
    Armor,
    Bind,
    Class,
    Durability,
    Glyph,
    Heroic,
    Icon,
    Level,
    Name,
    Quality,
    Race,
    Slot,
    Type,
    Unique,
    LocationBind,
    Damage,
    LowDamage,
    HighDamage,
    DamageSchool,
    Speed,
    BonusDamage,
    BonusLowDamage,
    BonusHighDamage,
    BonusDamageSchool,
    Dps,
    Block,
    Stat(PrimaryStat),
    Resist(School),
    Rating(Rating),
    Arena,
    BagSlots,
    BagType,
    Charges,
    Conjured,
    Create,
    CreateQuality,
    ItemPage,
    Duration,
    Equip,
    Faction,
    FactionRating,
    Flavor,
    Holiday,
    Id,
    ItemLevel,
    Lock,
    OnHit,
    Open,
    QuestBegin,
    QuestItem,
    Read,
    Sell,
    Reagents,
    Set,
    SetPieces,
    SetPage,
    Socket,
    SocketBonus,
    Skill,
    SkillRating,
    Subskill,
    UniqueEquipped,
    Use,
    Stack,
}

impl OverrideField {
    /// Resolves a lower-cased key or alias.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_tooltip_core::{OverrideField, PrimaryStat};
    ///
    /// assert_eq!(OverrideField::from_key("sta"), Some(OverrideField::Stat(PrimaryStat::Stamina)));
    /// assert_eq!(OverrideField::from_key("z"), Some(OverrideField::LocationBind));
    /// assert_eq!(OverrideField::from_key("colour"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "a" | "armor" => Self::Armor,
            "b" | "bind" | "binds" => Self::Bind,
            "c" | "cl" | "class" | "classes" => Self::Class,
            "d" | "dur" | "dura" | "durability" => Self::Durability,
            "g" | "glyph" => Self::Glyph,
            "h" | "heroic" => Self::Heroic,
            "i" | "icon" => Self::Icon,
            "l" | "level" => Self::Level,
            "n" | "name" => Self::Name,
            "q" | "qual" | "quality" => Self::Quality,
            "r" | "race" | "races" => Self::Race,
            "s" | "slot" => Self::Slot,
            "t" | "type" => Self::Type,
            "u" | "un" | "unique" => Self::Unique,
            "z" | "ins" | "zone" | "instance" | "instancebind" | "loc" | "location"
            | "locationbind" => Self::LocationBind,
            "damage" | "dmg" => Self::Damage,
            "lowdamage" | "damagelow" => Self::LowDamage,
            "hidamage" | "damagehigh" | "highdamage" => Self::HighDamage,
            "damageschool" | "school" => Self::DamageSchool,
            "speed" => Self::Speed,
            "bonus" | "bdam" => Self::BonusDamage,
            "bonuslowdamage" | "bonusdamagelow" => Self::BonusLowDamage,
            "bonushidamage" | "bonusdamagehigh" | "bonushighdamage" => Self::BonusHighDamage,
            "bonusdamageschool" | "bonusschool" => Self::BonusDamageSchool,
            "dps" => Self::Dps,
            "bl" | "block" => Self::Block,
            "str" | "strength" => Self::Stat(PrimaryStat::Strength),
            "agi" | "agility" => Self::Stat(PrimaryStat::Agility),
            "sta" | "stam" | "stamina" => Self::Stat(PrimaryStat::Stamina),
            "int" | "intellect" => Self::Stat(PrimaryStat::Intellect),
            "spi" | "spr" | "spirit" => Self::Stat(PrimaryStat::Spirit),
            "fire" => Self::Resist(School::Fire),
            "frost" => Self::Resist(School::Frost),
            "nature" => Self::Resist(School::Nature),
            "shadow" => Self::Resist(School::Shadow),
            "arcane" => Self::Resist(School::Arcane),
            "defense" | "def" => Self::Rating(Rating::Defense),
            "dodge" => Self::Rating(Rating::Dodge),
            "parry" => Self::Rating(Rating::Parry),
            "resilience" | "res" | "resil" => Self::Rating(Rating::Resilience),
            "blockrating" | "blockvalue" => Self::Rating(Rating::ShieldBlock),
            "hit" => Self::Rating(Rating::Hit),
            "crit" => Self::Rating(Rating::Crit),
            "haste" => Self::Rating(Rating::Haste),
            "expertise" | "exp" => Self::Rating(Rating::Expertise),
            "attack" | "ap" | "attackpower" => Self::Rating(Rating::AttackPower),
            "armorpen" | "arp" => Self::Rating(Rating::ArmorPenetration),
            "mp5" | "manaregen" => Self::Rating(Rating::ManaPerFive),
            "sp" | "spellpower" | "spell" => Self::Rating(Rating::SpellPower),
            "arena" => Self::Arena,
            "bag" | "bagslots" => Self::BagSlots,
            "bagtype" => Self::BagType,
            "charge" | "charges" => Self::Charges,
            "con" | "conj" | "conjured" => Self::Conjured,
            "create" => Self::Create,
            "createq" => Self::CreateQuality,
            "disambig" | "disambigpage" | "itempage" => Self::ItemPage,
            "duration" => Self::Duration,
            "equip" => Self::Equip,
            "faction" | "rep" | "reputation" => Self::Faction,
            "factionrating" | "reprating" => Self::FactionRating,
            "flavor" => Self::Flavor,
            "hol" | "holiday" => Self::Holiday,
            "id" => Self::Id,
            "ilvl" => Self::ItemLevel,
            "locked" | "lock" | "lockpick" | "lockpicking" => Self::Lock,
            "onhit" => Self::OnHit,
            "open" => Self::Open,
            "qb" | "qbegin" | "questbegin" | "beginquest" => Self::QuestBegin,
            "qi" | "questitem" => Self::QuestItem,
            "read" => Self::Read,
            "sell" => Self::Sell,
            "reagents" => Self::Reagents,
            "set" => Self::Set,
            "setpieces" | "setpc" => Self::SetPieces,
            "setpage" => Self::SetPage,
            "sock" | "socket" | "sockets" => Self::Socket,
            "sockbonus" | "socketbonus" => Self::SocketBonus,
            "skill" | "prof" | "profession" => Self::Skill,
            "skillrating" | "profrating" | "professionrating" => Self::SkillRating,
            "sub" | "spec" | "specialty" | "subskill" | "specialization" => Self::Subskill,
            "unique-equipped" | "ueq" | "unique-eq" => Self::UniqueEquipped,
            "use" => Self::Use,
            "stack" => Self::Stack,
            _ => return None,
        };
        Some(field)
    }

    /// Canonical field name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Bind => "bind",
            Self::Class => "class",
            Self::Durability => "durability",
            Self::Glyph => "glyph",
            Self::Heroic => "heroic",
            Self::Icon => "icon",
            Self::Level => "level",
            Self::Name => "name",
            Self::Quality => "quality",
            Self::Race => "race",
            Self::Slot => "slot",
            Self::Type => "type",
            Self::Unique => "unique",
            Self::LocationBind => "locationbind",
            Self::Damage => "dmg",
            Self::LowDamage => "lowdamage",
            Self::HighDamage => "highdamage",
            Self::DamageSchool => "damageschool",
            Self::Speed => "speed",
            Self::BonusDamage => "bdmg",
            Self::BonusLowDamage => "bonuslowdamage",
            Self::BonusHighDamage => "bonushighdamage",
            Self::BonusDamageSchool => "bonusdamageschool",
            Self::Dps => "dps",
            Self::Block => "block",
            Self::Stat(PrimaryStat::Strength) => "strength",
            Self::Stat(PrimaryStat::Agility) => "agility",
            Self::Stat(PrimaryStat::Stamina) => "stamina",
            Self::Stat(PrimaryStat::Intellect) => "intellect",
            Self::Stat(PrimaryStat::Spirit) => "spirit",
            Self::Resist(School::Fire) => "fire",
            Self::Resist(School::Frost) => "frost",
            Self::Resist(School::Nature) => "nature",
            Self::Resist(School::Shadow) => "shadow",
            Self::Resist(_) => "arcane",
            Self::Rating(rating) => rating.key(),
            Self::Arena => "arena",
            Self::BagSlots => "bagslots",
            Self::BagType => "bagtype",
            Self::Charges => "charges",
            Self::Conjured => "conjured",
            Self::Create => "create",
            Self::CreateQuality => "createq",
            Self::ItemPage => "itempage",
            Self::Duration => "duration",
            Self::Equip => "equip",
            Self::Faction => "faction",
            Self::FactionRating => "factionrating",
            Self::Flavor => "flavor",
            Self::Holiday => "holiday",
            Self::Id => "id",
            Self::ItemLevel => "ilvl",
            Self::Lock => "lockpick",
            Self::OnHit => "onhit",
            Self::Open => "open",
            Self::QuestBegin => "qbegin",
            Self::QuestItem => "questitem",
            Self::Read => "read",
            Self::Sell => "sell",
            Self::Reagents => "reagents",
            Self::Set => "set",
            Self::SetPieces => "setpieces",
            Self::SetPage => "setpage",
            Self::Socket => "socket",
            Self::SocketBonus => "sockbonus",
            Self::Skill => "skill",
            Self::SkillRating => "skillrating",
            Self::Subskill => "subskill",
            Self::UniqueEquipped => "unique-equipped",
            Self::Use => "use",
            Self::Stack => "stack",
        }
    }
}

/// Applies override arguments to `record`, in order.
///
/// Keys and values are HTML-escaped before use. The first invalid value
/// aborts the merge.
///
/// # Errors
///
/// Returns [`ValueError::InvalidField`] when a numeric field is not numeric
/// or an enumerated field fails its table lookup.
pub fn apply_overrides<I, K, V>(record: &mut AttributeRecord, args: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in args {
        let key = escape_html(key.as_ref()).to_lowercase();
        let value = escape_html(value.as_ref());
        match OverrideField::from_key(&key) {
            Some(field) => {
                debug!(key = %key, field = field.name(), "applying override");
                apply_field(record, field, &key, &value)?;
            }
            None => {
                debug!(key = %key, "unknown override kept as residue");
                record.undef.push(Residue::Argument { key, value });
            }
        }
    }
    Ok(())
}

fn numeric(field: OverrideField, value: &str) -> Result<Number> {
    Number::parse(value).ok_or_else(|| ValueError::invalid(field.name(), "numeric", value).into())
}

fn lookup<T>(
    field: OverrideField,
    expected: &str,
    value: &str,
    resolve: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    resolve(value).ok_or_else(|| ValueError::invalid(field.name(), expected, value).into())
}

/// Splits `value` on `separator` and resolves every token, failing on the
/// first one the table rejects.
fn lookup_list<T>(
    field: OverrideField,
    expected: &str,
    value: &str,
    separator: char,
    resolve: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>> {
    let mut resolved = Vec::new();
    for token in value.split(separator).filter(|token| !token.is_empty()) {
        match resolve(token) {
            Some(found) => resolved.push(found),
            None => return Err(ValueError::invalid(field.name(), expected, value).into()),
        }
    }
    Ok(resolved)
}

fn effect_list(value: &str) -> Vec<String> {
    value.split('/').map(|effect| effect.trim().to_string()).collect()
}

/// Reads a `44-115` or `44 - 115` range.
fn parse_range(value: &str) -> RawRange {
    let mut tokens = value.split_whitespace();
    let first = tokens.next().unwrap_or_default();
    match first.split_once('-') {
        Some((low, high)) if !low.is_empty() => RawRange::new(low, high),
        _ => {
            let high = tokens.nth(1).map(str::to_string);
            RawRange {
                low: Some(first.to_string()),
                high,
            }
        }
    }
}

/// Uniqueness is one value spread over four draft fields.
fn clear_uniqueness(record: &mut AttributeRecord) {
    record.unique = false;
    record.unique_n = None;
    record.unique_eq = false;
    record.unique_eq_n = None;
}

fn apply_field(
    record: &mut AttributeRecord,
    field: OverrideField,
    key: &str,
    value: &str,
) -> Result<()> {
    use OverrideField as F;

    match field {
        F::Armor => record.armor = Some(numeric(field, value)?),
        F::Bind => {
            record.bind = Some(lookup(field, "one of the four bind types", value, BindType::lookup)?)
        }
        F::Class => {
            let classes = lookup_list(field, "one of the playable classes", value, ' ', PlayerClass::lookup)?;
            record.class = classes.into_iter().collect();
        }
        F::Durability => record.durability = Some(numeric(field, value)?),
        F::Glyph => record.glyph = Some(GlyphType::from_override(value)),
        F::Heroic => record.heroic = true,
        F::Icon => record.icon = Some(capitalize_first(&value.to_lowercase())),
        F::Level => record.level = Some(numeric(field, value)?),
        F::Name => record.name = Some(capitalize_first(value)),
        F::Quality => {
            record.quality = Some(lookup(field, "a valid item quality", value, Quality::lookup)?)
        }
        F::Race => {
            let races = lookup_list(field, "one of the playable races", value, ' ', Race::lookup)?;
            record.race = races.into_iter().collect();
        }
        F::Slot => record.slot = Some(lookup(field, "a valid equipment slot", value, Slot::lookup)?),
        F::Type => {
            record.item_type = Some(lookup(field, "a valid armor/weapon type", value, ItemType::lookup)?)
        }
        F::Unique => {
            clear_uniqueness(record);
            match Number::parse(value) {
                Some(count) => record.unique_n = Some(count),
                None => record.unique = true,
            }
        }
        F::LocationBind => record.locationbind = Some(value.to_string()),
        F::Damage => record.dmg = Some(parse_range(value)),
        F::LowDamage => record.dmg.get_or_insert_with(RawRange::default).low = Some(value.to_string()),
        F::HighDamage => {
            record.dmg.get_or_insert_with(RawRange::default).high = Some(value.to_string())
        }
        F::DamageSchool => {
            record.damage_school =
                Some(lookup(field, "one of the WoW magic schools", value, School::lookup)?)
        }
        F::Speed => record.speed = Some(value.to_string()),
        F::BonusDamage => record.bdmg = Some(parse_range(value)),
        F::BonusLowDamage => {
            record.bdmg.get_or_insert_with(RawRange::default).low = Some(value.to_string())
        }
        F::BonusHighDamage => {
            record.bdmg.get_or_insert_with(RawRange::default).high = Some(value.to_string())
        }
        F::BonusDamageSchool => {
            record.bonus_damage_school =
                Some(lookup(field, "one of the WoW magic schools", value, School::lookup)?)
        }
        F::Dps => record.dps = Some(value.to_string()),
        F::Block => record.block = Some(numeric(field, value)?),
        F::Stat(stat) => {
            record.stats.insert(stat, numeric(field, value)?);
        }
        F::Resist(school) => {
            record.resist.insert(school, numeric(field, value)?);
        }
        F::Rating(rating) => {
            record.ratings.insert(rating, numeric(field, value)?);
        }
        F::Arena => record.arena = Some(numeric(field, value)?),
        F::BagSlots => record.bagslots = Some(numeric(field, value)?),
        F::BagType => record.bagtype = Some(lookup(field, "a valid bag type", value, BagType::lookup)?),
        F::Charges => record.charges = Some(numeric(field, value)?),
        F::Conjured => record.conjured = true,
        F::Create => record.create = Some(value.to_string()),
        F::CreateQuality => {
            record.createq = Some(lookup(field, "a valid item quality", value, Quality::lookup)?)
        }
        F::ItemPage => record.itempage = Some(value.to_string()),
        F::Duration => record.duration = Some(value.to_string()),
        F::Equip => record.equip = effect_list(value),
        F::Faction => record.faction = Some(title_case(value)),
        F::FactionRating => {
            record.factionrating =
                Some(lookup(field, "a valid reputation level", value, Standing::lookup)?)
        }
        F::Flavor => record.flavor = Some(value.to_string()),
        F::Holiday => {
            record.holiday = Some(lookup(field, "a valid holiday", value, Holiday::lookup)?)
        }
        F::Id => record.id = Some(value.to_string()),
        F::ItemLevel => record.ilvl = Some(value.to_string()),
        F::Lock => {
            record.locked = false;
            record.lockpick = None;
            match Number::parse(value) {
                Some(skill) => record.lockpick = Some(skill),
                None => record.locked = true,
            }
        }
        F::OnHit => record.onhit = effect_list(value),
        F::Open => record.open = true,
        F::QuestBegin => record.qbegin = Some(value.to_string()),
        F::QuestItem => record.questitem = true,
        F::Read => record.read = true,
        F::Sell => record.sell = Some(SellPrice::Text(value.to_string())),
        F::Reagents => record.reagents = Some(value.to_string()),
        F::Set => record.set = Some(value.to_string()),
        F::SetPieces => record.setpieces = Some(numeric(field, value)?),
        F::SetPage => record.setpage = Some(value.to_string()),
        F::Socket => {
            record.socket = lookup_list(field, "a valid socket color", value, ' ', SocketColor::lookup)?
        }
        F::SocketBonus => record.sockbonus = Some(value.to_string()),
        F::Skill => record.skill = Some(lookup(field, "a playable profession", value, Profession::lookup)?),
        F::SkillRating => record.skillrating = Some(numeric(field, value)?),
        F::Subskill => {
            record.subskill = Some(lookup(
                field,
                "a valid profession specialization",
                value,
                Specialization::lookup,
            )?)
        }
        F::UniqueEquipped => {
            clear_uniqueness(record);
            if value.is_empty() || value == key {
                record.unique_eq = true;
            } else {
                record.unique_eq_n = Some(value.to_string());
            }
        }
        F::Use => record.use_effects = effect_list(value),
        F::Stack => record.stack = Some(numeric(field, value)?),
    }
    Ok(())
}
