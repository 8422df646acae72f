//! Binding, equipment type, slot, socket, bag and glyph tables.

use serde::{Deserialize, Serialize};

use super::{exact_alias_match, numeric_code};

/// How an item becomes soulbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindType {
    OnPickup,
    OnEquip,
    OnUse,
    ToAccount,
}

const BIND_ALIASES: &[(&[&str], BindType)] = &[
    (&["bop", "picked", "pickup", "bind on pickup", "p"], BindType::OnPickup),
    (&["boe", "equipped", "equip", "bind on equip", "e"], BindType::OnEquip),
    (&["bou", "used", "use", "bind on use", "u"], BindType::OnUse),
    (&["bta", "account", "bind to account", "a"], BindType::ToAccount),
];

impl BindType {
    /// Resolves a bind alias such as `"bop"`, `"equipped"` or `"account"`.
    pub fn lookup(input: &str) -> Option<Self> {
        exact_alias_match(input, BIND_ALIASES)
    }

    /// Article the tooltip line links to.
    pub fn page(self) -> &'static str {
        match self {
            Self::OnPickup => "Bind on Pickup",
            Self::OnEquip => "Bind on Equip",
            Self::OnUse => "Bind on Use",
            Self::ToAccount => "Bind to Account",
        }
    }

    /// Text shown in game.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnPickup => "Binds when picked up",
            Self::OnEquip => "Binds when equipped",
            Self::OnUse => "Binds when used",
            Self::ToAccount => "Binds to account",
        }
    }

    pub fn markup(self) -> String {
        format!("[[{}|{}]]", self.page(), self.label())
    }
}

/// Armor or weapon type shown at the right of the slot line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Cloth,
    Leather,
    Mail,
    Plate,
    FishingPole,
    FistWeapon,
    Libram,
    Totem,
    Arrow,
    Axe,
    Bow,
    Bullet,
    Crossbow,
    Dagger,
    Gun,
    Idol,
    Mace,
    Polearm,
    Shield,
    Staff,
    Sword,
    Thrown,
    Wand,
}

const TYPE_ALIASES: &[(&[&str], ItemType)] = &[
    (&["cloth"], ItemType::Cloth),
    (&["leather"], ItemType::Leather),
    (&["mail"], ItemType::Mail),
    (&["plate"], ItemType::Plate),
    (&["fishing", "pole", "fishingpole", "fishing pole"], ItemType::FishingPole),
    (&["fist", "fist weapon"], ItemType::FistWeapon),
    (&["libram"], ItemType::Libram),
    (&["totem"], ItemType::Totem),
    (&["arrow"], ItemType::Arrow),
    (&["axe"], ItemType::Axe),
    (&["bow"], ItemType::Bow),
    (&["bullet"], ItemType::Bullet),
    (&["crossbow"], ItemType::Crossbow),
    (&["dagger"], ItemType::Dagger),
    (&["gun"], ItemType::Gun),
    (&["idol"], ItemType::Idol),
    (&["mace"], ItemType::Mace),
    (&["polearm"], ItemType::Polearm),
    (&["shield"], ItemType::Shield),
    (&["staff"], ItemType::Staff),
    (&["sword"], ItemType::Sword),
    (&["thrown"], ItemType::Thrown),
    (&["wand"], ItemType::Wand),
];

impl ItemType {
    /// Resolves a full type name (`"Cloth"`, `"Fishing Pole"`, `"Staff"`).
    pub fn lookup(input: &str) -> Option<Self> {
        exact_alias_match(input, TYPE_ALIASES)
    }

    /// Article the type links to.
    pub fn page(self) -> &'static str {
        match self {
            Self::Cloth => "Cloth armor",
            Self::Leather => "Leather armor",
            Self::Mail => "Mail armor",
            Self::Plate => "Plate armor",
            Self::FishingPole => "Fishing pole",
            Self::FistWeapon => "Fist weapon",
            Self::Libram => "Libram (relic)",
            Self::Totem => "Totem (relic)",
            other => other.label(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cloth => "Cloth",
            Self::Leather => "Leather",
            Self::Mail => "Mail",
            Self::Plate => "Plate",
            Self::FishingPole => "Fishing Pole",
            Self::FistWeapon => "Fist Weapon",
            Self::Libram => "Libram",
            Self::Totem => "Totem",
            Self::Arrow => "Arrow",
            Self::Axe => "Axe",
            Self::Bow => "Bow",
            Self::Bullet => "Bullet",
            Self::Crossbow => "Crossbow",
            Self::Dagger => "Dagger",
            Self::Gun => "Gun",
            Self::Idol => "Idol",
            Self::Mace => "Mace",
            Self::Polearm => "Polearm",
            Self::Shield => "Shield",
            Self::Staff => "Staff",
            Self::Sword => "Sword",
            Self::Thrown => "Thrown",
            Self::Wand => "Wand",
        }
    }

    pub fn markup(self) -> String {
        if self.page() == self.label() {
            format!("[[{}]]", self.label())
        } else {
            format!("[[{}|{}]]", self.page(), self.label())
        }
    }

    /// Two-handed weapon types that grant druids feral attack power.
    pub fn grants_feral_attack_power(self) -> bool {
        matches!(self, Self::Staff | Self::Mace | Self::Polearm)
    }
}

/// Inventory slot, keyed by the game's slot id.
///
/// Virtual slots that the paper doll does not have use negative ids:
/// Two-Hand `-15`, One-Hand `-16`, Held In Off-hand `-17`, Relic `-18` and
/// Thrown `-19`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Projectile,
    Head,
    Neck,
    Shoulder,
    Shirt,
    Chest,
    Waist,
    Legs,
    Feet,
    Wrist,
    Hands,
    Finger,
    SecondFinger,
    Trinket,
    SecondTrinket,
    Back,
    MainHand,
    OffHand,
    Ranged,
    Tabard,
    TwoHand,
    OneHand,
    HeldInOffHand,
    Relic,
    Thrown,
}

const SLOT_ALIASES: &[(&[&str], Slot)] = &[
    (&["main", "mainhand", "main hand", "main-hand", "mh"], Slot::MainHand),
    (&["offhand", "off", "off hand", "off-hand", "oh"], Slot::OffHand),
    (&["held", "held in off-hand", "held in off hand"], Slot::HeldInOffHand),
    (&["onehand", "1h", "one", "one hand", "one-hand"], Slot::OneHand),
    (&["twohand", "2h", "two", "two hand", "two-hand"], Slot::TwoHand),
    (&["back"], Slot::Back),
    (&["chest"], Slot::Chest),
    (&["feet"], Slot::Feet),
    (&["finger"], Slot::Finger),
    (&["hands"], Slot::Hands),
    (&["head"], Slot::Head),
    (&["legs"], Slot::Legs),
    (&["neck"], Slot::Neck),
    (&["projectile"], Slot::Projectile),
    (&["ranged"], Slot::Ranged),
    (&["relic"], Slot::Relic),
    (&["shirt"], Slot::Shirt),
    (&["shoulder"], Slot::Shoulder),
    (&["tabard"], Slot::Tabard),
    (&["thrown"], Slot::Thrown),
    (&["trinket"], Slot::Trinket),
    (&["waist"], Slot::Waist),
    (&["wrist"], Slot::Wrist),
];

const ALL_SLOTS: [Slot; 25] = [
    Slot::Projectile,
    Slot::Head,
    Slot::Neck,
    Slot::Shoulder,
    Slot::Shirt,
    Slot::Chest,
    Slot::Waist,
    Slot::Legs,
    Slot::Feet,
    Slot::Wrist,
    Slot::Hands,
    Slot::Finger,
    Slot::SecondFinger,
    Slot::Trinket,
    Slot::SecondTrinket,
    Slot::Back,
    Slot::MainHand,
    Slot::OffHand,
    Slot::Ranged,
    Slot::Tabard,
    Slot::TwoHand,
    Slot::OneHand,
    Slot::HeldInOffHand,
    Slot::Relic,
    Slot::Thrown,
];

impl Slot {
    /// Resolves a slot name, alias or slot id.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_tooltip_core::Slot;
    ///
    /// assert_eq!(Slot::lookup("Two-Hand").map(Slot::id), Some(-15));
    /// assert_eq!(Slot::lookup("mh"), Some(Slot::MainHand));
    /// assert_eq!(Slot::lookup("-17"), Some(Slot::HeldInOffHand));
    /// ```
    pub fn lookup(input: &str) -> Option<Self> {
        if let Some(code) = numeric_code(input) {
            return Self::from_id(code);
        }
        exact_alias_match(input, SLOT_ALIASES)
    }

    pub fn from_id(id: i32) -> Option<Self> {
        ALL_SLOTS.iter().copied().find(|slot| slot.id() == id)
    }

    pub fn id(self) -> i32 {
        match self {
            Self::Projectile => 0,
            Self::Head => 1,
            Self::Neck => 2,
            Self::Shoulder => 3,
            Self::Shirt => 4,
            Self::Chest => 5,
            Self::Waist => 6,
            Self::Legs => 7,
            Self::Feet => 8,
            Self::Wrist => 9,
            Self::Hands => 10,
            Self::Finger => 11,
            Self::SecondFinger => 12,
            Self::Trinket => 13,
            Self::SecondTrinket => 14,
            Self::Back => 15,
            Self::MainHand => 16,
            Self::OffHand => 17,
            Self::Ranged => 18,
            Self::Tabard => 19,
            Self::TwoHand => -15,
            Self::OneHand => -16,
            Self::HeldInOffHand => -17,
            Self::Relic => -18,
            Self::Thrown => -19,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Projectile => "Projectile",
            Self::Head => "Head",
            Self::Neck => "Neck",
            Self::Shoulder => "Shoulder",
            Self::Shirt => "Shirt",
            Self::Chest => "Chest",
            Self::Waist => "Waist",
            Self::Legs => "Legs",
            Self::Feet => "Feet",
            Self::Wrist => "Wrist",
            Self::Hands => "Hands",
            Self::Finger | Self::SecondFinger => "Finger",
            Self::Trinket | Self::SecondTrinket => "Trinket",
            Self::Back => "Back",
            Self::MainHand => "Main Hand",
            Self::OffHand => "Off Hand",
            Self::Ranged => "Ranged",
            Self::Tabard => "Tabard",
            Self::TwoHand => "Two-Hand",
            Self::OneHand => "One-Hand",
            Self::HeldInOffHand => "Held in off hand",
            Self::Relic => "Relic",
            Self::Thrown => "Thrown",
        }
    }
}

/// Gem socket colour.
///
/// Declaration order is the order socket counts are exported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketColor {
    Meta,
    Red,
    Blue,
    Yellow,
    Prismatic,
}

const SOCKET_ALIASES: &[(&[&str], SocketColor)] = &[
    (&["b", "bl", "blue"], SocketColor::Blue),
    (&["r", "red"], SocketColor::Red),
    (&["y", "yel", "yellow"], SocketColor::Yellow),
    (&["m", "meta"], SocketColor::Meta),
    (
        &["c", "chr", "p", "pris", "chromatic", "prismatic"],
        SocketColor::Prismatic,
    ),
];

impl SocketColor {
    pub const ALL: [SocketColor; 5] = [
        SocketColor::Meta,
        SocketColor::Red,
        SocketColor::Blue,
        SocketColor::Yellow,
        SocketColor::Prismatic,
    ];

    pub fn lookup(input: &str) -> Option<Self> {
        exact_alias_match(input, SOCKET_ALIASES)
    }

    /// Position of this colour in [`SocketColor::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Meta => "Meta",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Prismatic => "Prismatic",
        }
    }
}

/// Specialty container types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BagType {
    AmmoPouch,
    Enchanting,
    Engineering,
    Herbalism,
    Inscription,
    Jewelcrafting,
    Leatherworking,
    Mining,
    Quiver,
    Soul,
}

const BAG_FRAGMENTS: &[(&[&str], BagType)] = &[
    (&["amm"], BagType::AmmoPouch),
    (&["enc"], BagType::Enchanting),
    (&["eng"], BagType::Engineering),
    (&["her"], BagType::Herbalism),
    (&["ins"], BagType::Inscription),
    (&["jew"], BagType::Jewelcrafting),
    (&["lea"], BagType::Leatherworking),
    (&["min"], BagType::Mining),
    (&["qui"], BagType::Quiver),
    (&["sou"], BagType::Soul),
];

impl BagType {
    /// Resolves a bag type by fragment.
    ///
    /// Unlike the other fragment tables the *last* matching entry wins.
    pub fn lookup(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        BAG_FRAGMENTS
            .iter()
            .rev()
            .find(|(fragments, _)| fragments.iter().any(|f| lowered.contains(f)))
            .map(|(_, bag)| *bag)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AmmoPouch => "Ammo Pouch",
            Self::Enchanting => "Enchanting Bag",
            Self::Engineering => "Engineering Bag",
            Self::Herbalism => "Herbalism Bag",
            Self::Inscription => "Inscription Bag",
            Self::Jewelcrafting => "Jewelcrafting Bag",
            Self::Leatherworking => "Leatherworking Bag",
            Self::Mining => "Mining Bag",
            Self::Quiver => "Quiver",
            Self::Soul => "Soul Bag",
        }
    }
}

/// Glyph strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphType {
    Major,
    Minor,
}

impl GlyphType {
    /// Reads the glyph type from the start of a `"Major Glyph"` line.
    pub fn from_line(line: &str) -> Option<Self> {
        if line.starts_with("Major") {
            Some(Self::Major)
        } else if line.starts_with("Minor") {
            Some(Self::Minor)
        } else {
            None
        }
    }

    /// Loose override form: anything mentioning `mi` is minor.
    pub fn from_override(value: &str) -> Self {
        if value.to_lowercase().contains("mi") {
            Self::Minor
        } else {
            Self::Major
        }
    }

    pub fn page(self) -> &'static str {
        match self {
            Self::Major => "Major glyph",
            Self::Minor => "Minor glyph",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Major => "Major Glyph",
            Self::Minor => "Minor Glyph",
        }
    }

    pub fn markup(self) -> String {
        format!("[[{}|{}]]", self.page(), self.label())
    }
}
