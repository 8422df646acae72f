//! Semantic metadata export.
//!
//! On an item's own page the tooltip is preceded by a single `{{#set:...}}`
//! line recording every attribute as a semantic property, followed by the
//! category link that files the page.

use item_tooltip_core::{Damage, Item, LockState, PrimaryStat, Rating, SocketColor, Uniqueness};

use crate::config::TooltipConfig;

/// Accumulates `|Property=value` pairs.
struct PropertyLine {
    out: String,
    empty: bool,
}

impl PropertyLine {
    fn new() -> Self {
        Self {
            out: String::from("{{#set:"),
            empty: true,
        }
    }

    fn set(&mut self, property: &str, value: impl std::fmt::Display) -> &mut Self {
        if !self.empty {
            self.out.push('|');
        }
        self.empty = false;
        self.out.push_str(&format!("{property}={value}"));
        self
    }

    fn flag(&mut self, property: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.set(property, "true");
        }
        self
    }

    fn opt(&mut self, property: &str, value: Option<impl std::fmt::Display>) -> &mut Self {
        if let Some(value) = value {
            self.set(property, value);
        }
        self
    }

    fn finish(self, category: &str, sort_key: &str) -> String {
        format!("{}}} [[Category:{category}|{sort_key}]]", self.out)
    }
}

/// Builds the metadata line for `item`.
///
/// Properties appear in tooltip order; absent attributes are omitted.
///
/// # Examples
///
/// ```
/// use item_tooltip_core::{AttributeRecord, FinalizeOptions, apply_overrides, finalize};
/// use item_tooltip_parser::{TooltipConfig, metadata_line};
///
/// let mut record = AttributeRecord::named("Hearthstone");
/// apply_overrides(&mut record, [("id", "6948"), ("ilvl", "1"), ("q", "common")]).unwrap();
/// let item = finalize(record, &FinalizeOptions::default()).unwrap();
///
/// assert_eq!(
///     metadata_line(&item, &TooltipConfig::default()),
///     "{{#set:Name=Hearthstone|Item page=Hearthstone|Quality=Common|Icon=Temp|ID=6948\
///      |Item level=1}} [[Category:Item pages|Hearthstone]]"
/// );
/// ```
pub fn metadata_line(item: &Item, config: &TooltipConfig) -> String {
    let mut line = PropertyLine::new();
    line.set("Name", &item.name)
        .set("Item page", &item.itempage)
        .set("Quality", item.quality.name())
        .set("Icon", &item.icon)
        .set("ID", &item.id);

    line.flag("Heroic", item.heroic)
        .flag("Conjured", item.conjured)
        .opt("Requires holiday", item.holiday.map(|holiday| holiday.name()))
        .opt("Requires zone", item.locationbind.as_ref())
        .opt("Bind type", item.bind.map(|bind| bind.page()))
        .flag("Quest item", item.questitem);

    match &item.uniqueness {
        Some(Uniqueness::Unique) => {
            line.set("Unique", "true");
        }
        Some(Uniqueness::Limited(count)) => {
            line.set("Max quantity", count);
        }
        Some(Uniqueness::Equipped) => {
            line.set("Unique-equipped", "true");
        }
        Some(Uniqueness::EquippedLimited(limit)) => {
            line.set("Max equipped", limit);
        }
        None => {}
    }

    line.opt("Glyph type", item.glyph.map(|glyph| glyph.page()))
        .opt("Limited duration", item.duration.as_ref());
    if let Some(quest) = &item.qbegin {
        line.set("Begins a quest", "true").set("Quest begin", quest);
    }
    line.opt("Equipment type", item.item_type.map(|kind| kind.page()))
        .opt("Slot", item.slot.map(|slot| slot.name()));

    if let Some(weapon) = &item.weapon {
        let Damage { low, high, school } = &weapon.damage;
        line.set("Speed", &weapon.speed)
            .set("Low damage", low)
            .set("High damage", high)
            .set("Damage per second", &weapon.dps)
            .opt("Damage school", school.map(|school| school.name()));
        if let Some(Damage { low, high, school }) = &weapon.bonus {
            line.set("Bonus low damage", low)
                .set("Bonus high damage", high)
                .opt("Bonus damage school", school.map(|school| school.name()));
        }
    }

    line.opt("Armor", item.armor.as_ref())
        .opt("Block", item.block.as_ref());
    for stat in PrimaryStat::ALL {
        line.opt(stat.name(), item.stats.get(&stat));
    }
    for (school, value) in &item.resist {
        line.set(&format!("{} resistance", school.name()), value);
    }

    if let Some(sockets) = &item.sockets {
        let counts = sockets.counts();
        for color in SocketColor::ALL {
            let count = counts[color.index()];
            if count > 0 {
                line.set(&format!("{} sockets", color.name()), count);
            }
        }
        line.set("Socket bonus", &sockets.bonus);
    }

    line.opt("Durability", item.durability.as_ref());
    match &item.lock {
        Some(LockState::Locked) => {
            line.set("Locked", "true");
        }
        Some(LockState::Lockpicking(skill)) => {
            line.set("Requires lockpicking", skill);
        }
        None => {}
    }
    if let Some(bag) = &item.bag {
        line.opt("Specialty bag", bag.kind.map(|kind| kind.name()))
            .set("Bag slots", &bag.slots);
    }

    for class in &item.classes {
        line.set("Requires class", class.name());
    }
    for race in &item.races {
        line.set("Requires race", race.name());
    }
    line.opt("Requires level", item.level.as_ref())
        .set("Item level", &item.ilvl)
        .opt("Requires specialization", item.subskill.map(|spec| spec.name()));
    if let Some(req) = &item.profession {
        line.set("Requires profession", req.profession.name())
            .set("Requires profession skill", &req.rating);
    }
    if let Some(req) = &item.reputation {
        line.set("Requires reputation", &req.faction)
            .set("Requires reputation rating", req.standing.name());
    }
    line.opt("Requires arena rating", item.arena.as_ref());
    for onhit in &item.onhit {
        line.set("Chance on hit", onhit);
    }

    for rating in Rating::ALL {
        line.opt(rating.export_name(), item.ratings.get(&rating));
    }
    for equip in &item.equip {
        line.set("Equip", equip);
    }
    for effect in &item.use_effects {
        line.set("Use", effect);
    }

    if let Some(recipe) = &item.recipe {
        line.set("Is recipe", "true")
            .set("Creates", &recipe.creates)
            .set("Create quality", recipe.quality.name())
            .set("Reagents", &recipe.reagents);
    }
    line.opt("Charges", item.charges.as_ref())
        .opt("Flavor", item.flavor.as_ref())
        .flag("Readable", item.read)
        .flag("Openable", item.open);
    if let Some(set) = &item.set {
        line.set("In set", &set.name)
            .set("Set page", &set.page)
            .set("Set pieces", &set.pieces);
    }
    line.opt("Sell price", item.sell.as_ref().map(|sell| sell.markup()));

    line.finish(&config.category, &item.itempage)
}
