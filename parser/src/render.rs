//! Tooltip rendering.
//!
//! [`render_lines`] turns a finalized [`Item`] into its tooltip lines in
//! display order; [`render_tooltip`] wraps them in the tooltip `<div>`,
//! prefixed with the metadata line when the tooltip sits on the item's own
//! page.
//!
//! # Examples
//!
//! ```
//! use item_tooltip_core::{AttributeRecord, FinalizeOptions, apply_overrides, finalize};
//! use item_tooltip_parser::{RenderContext, TooltipConfig, render_lines};
//!
//! let mut record = AttributeRecord::named("Worn Shortsword");
//! apply_overrides(&mut record, [("id", "25"), ("ilvl", "2"), ("armor", "5")]).unwrap();
//! let item = finalize(record, &FinalizeOptions::default()).unwrap();
//!
//! let config = TooltipConfig::default();
//! let lines = render_lines(&item, &RenderContext::for_page(&item, None, &config));
//! let classes: Vec<_> = lines.iter().map(|line| line.class.as_str()).collect();
//! assert_eq!(classes, ["name", "armor", "iLvl"]);
//! ```

use serde::Serialize;

use item_tooltip_core::{
    Damage, Item, LockState, PrimaryStat, Rating, Uniqueness, format_decimal,
};

use crate::config::TooltipConfig;
use crate::metadata::metadata_line;

/// How a tooltip line is wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Plain,
    /// Right-aligned, next to the following line (weapon speed).
    FloatRight,
    /// Right-aligned and clearing earlier floats (armor/weapon type).
    FloatRightClear,
    /// Carries a hover title.
    Titled(String),
    /// A bare transclusion outside any list item.
    Transclusion,
}

/// One rendered tooltip line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipLine {
    pub class: String,
    pub text: String,
    pub style: LineStyle,
}

impl TooltipLine {
    fn new(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: text.into(),
            style: LineStyle::Plain,
        }
    }

    fn styled(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Wiki markup for the line, newline-terminated.
    pub fn to_markup(&self) -> String {
        let Self { class, text, style } = self;
        match style {
            LineStyle::Plain => format!(" <li class=\"{class}\">{text}</li>\n"),
            LineStyle::FloatRight => {
                format!(" <li class=\"{class}\" style=\"float:right\">{text}</li>\n")
            }
            LineStyle::FloatRightClear => {
                format!(" <li class=\"{class}\" style=\"float:right; clear:all\">{text}</li>\n")
            }
            LineStyle::Titled(title) => {
                format!(" <li class=\"{class}\" title=\"{title}\">{text}</li>\n")
            }
            LineStyle::Transclusion => format!(" {text}\n"),
        }
    }
}

/// Where the tooltip is being rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The tooltip is rendered on the item's own page.
    pub own_page: bool,
    pub config: &'a TooltipConfig,
}

impl<'a> RenderContext<'a> {
    /// Compares the calling page title with the item page.
    pub fn for_page(item: &Item, page: Option<&str>, config: &'a TooltipConfig) -> Self {
        Self {
            own_page: page == Some(item.itempage.as_str()),
            config,
        }
    }
}

fn school_link(damage: &Damage) -> String {
    match damage.school {
        Some(school) => {
            let name = school.name();
            format!(" [[Magic schools (WoW)#{name}|{name}]]")
        }
        None => String::new(),
    }
}

fn rating_line(rating: Rating, value: &str) -> TooltipLine {
    let (class, text) = match rating {
        Rating::Defense => ("bonus defense", format!("Equip: Increases [[defense rating]] by {value}.")),
        Rating::Dodge => ("bonus dodge", format!("Equip: Increases your [[dodge rating]] by {value}.")),
        Rating::Parry => ("bonus parry", format!("Equip: Increases your [[parry rating]] by {value}.")),
        Rating::ShieldBlock => (
            "bonus block",
            format!("Equip: Increases your shield [[block rating]] by {value}."),
        ),
        Rating::Haste => ("bonus haste", format!("Equip: Improves [[haste rating]] by {value}.")),
        Rating::Hit => ("bonus hit", format!("Equip: Improves [[hit rating]] by {value}.")),
        Rating::Crit => (
            "bonus crit",
            format!("Equip: Improves [[critical strike rating]] by {value}."),
        ),
        Rating::Resilience => (
            "bonus resil",
            format!("Equip: Improves [[resilience rating]] by {value}."),
        ),
        Rating::Expertise => (
            "bonus exp",
            format!("Equip: Increases your [[expertise rating]] by {value}."),
        ),
        Rating::AttackPower => ("bonus ap", format!("Equip: Increases [[attack power]] by {value}.")),
        Rating::ManaPerFive => ("bonus mp5", format!("Equip: Restores {value} [[MP5|mana per 5]] sec.")),
        Rating::ArmorPenetration => (
            "bonus arp",
            format!("Equip: Increases your [[armor penetration rating]] by {value}."),
        ),
        Rating::SpellPower => ("bonus sp", format!("Equip: Increases [[spell power]] by {value}.")),
    };
    TooltipLine::new(class, text)
}

/// Renders the tooltip lines of `item` in display order.
pub fn render_lines(item: &Item, ctx: &RenderContext<'_>) -> Vec<TooltipLine> {
    let mut lines = vec![TooltipLine::new(
        "name",
        format!(
            "{{{{Quality|{}|{}|{}|tooltip=1}}}}",
            item.quality.name(),
            item.itempage,
            item.name
        ),
    )];

    if item.heroic {
        lines.push(TooltipLine::new("bonus heroic", "Heroic"));
    }
    if item.conjured {
        lines.push(TooltipLine::new("conjured", "[[Conjured item|Conjured Item]]"));
    }
    if let Some(holiday) = item.holiday {
        lines.push(TooltipLine::new(
            "req reqHoliday",
            format!("Requires [[{}]]", holiday.name()),
        ));
    }
    if let Some(zone) = &item.locationbind {
        lines.push(TooltipLine::new("req reqZone", zone.as_str()));
    }
    if let Some(bind) = item.bind {
        lines.push(TooltipLine::new("bind", bind.markup()));
    }
    if item.questitem {
        lines.push(TooltipLine::new("qitem", "[[Quest item|Quest Item]]"));
    }
    match &item.uniqueness {
        Some(Uniqueness::Unique) => lines.push(TooltipLine::new("unique", "[[Unique]]")),
        Some(Uniqueness::Limited(count)) => {
            lines.push(TooltipLine::new("uniqueN", format!("[[Unique]] ({count})")));
        }
        Some(Uniqueness::Equipped) => lines.push(TooltipLine::new(
            "uniqueEq",
            "[[Unique-equipped|Unique-Equipped]]",
        )),
        Some(Uniqueness::EquippedLimited(limit)) => lines.push(TooltipLine::new(
            "uniqueEqN",
            format!("[[Unique-equipped|Unique-Equipped]] ({limit})"),
        )),
        None => {}
    }
    if let Some(glyph) = item.glyph {
        lines.push(TooltipLine::new("glyph", glyph.markup()));
    }
    if let Some(duration) = &item.duration {
        lines.push(TooltipLine::new(
            "duration",
            format!("[[Duration (item)|Duration]]: {duration}"),
        ));
    }
    if let Some(quest) = &item.qbegin {
        lines.push(TooltipLine::new(
            "qbegin",
            format!("{{{{Quest|{quest}|This Item Begins a Quest}}}}"),
        ));
    }
    // Right-aligned lines precede their left-aligned partner.
    if let Some(kind) = item.item_type {
        lines.push(TooltipLine::new("type", kind.markup()).styled(LineStyle::FloatRightClear));
    }
    if let Some(slot) = item.slot {
        lines.push(TooltipLine::new("slot", format!("[[{}]]", slot.name())));
    }
    if let Some(weapon) = &item.weapon {
        lines.push(
            TooltipLine::new("speed", format!("[[Speed (attack)|Speed]] {}", weapon.speed))
                .styled(LineStyle::FloatRight),
        );
        let damage = &weapon.damage;
        lines.push(TooltipLine::new(
            "damage",
            format!("{} – {}{} Damage", damage.low, damage.high, school_link(damage)),
        ));
        if let Some(bonus) = &weapon.bonus {
            lines.push(TooltipLine::new(
                "bonusDamage",
                format!("+{} – {}{} Damage", bonus.low, bonus.high, school_link(bonus)),
            ));
        }
        lines.push(TooltipLine::new(
            "dps",
            format!("({} [[DPS|damage per second]])", weapon.dps),
        ));
        if let Some(feral) = weapon.feral_attack_power {
            lines.push(
                TooltipLine::new(
                    "feralAP",
                    format!(
                        "({} [[Feral attack power|<span class=\"cc-druid\">feral attack power</span>]])",
                        format_decimal(feral)
                    ),
                )
                .styled(LineStyle::Titled("Only applies for druids".to_string())),
            );
        }
    }
    if let Some(armor) = &item.armor {
        lines.push(TooltipLine::new("armor", format!("{armor} [[Armor]]")));
    }
    if let Some(block) = &item.block {
        lines.push(TooltipLine::new("block", format!("{block} [[Block value|Block]]")));
    }
    for stat in PrimaryStat::ALL {
        if let Some(value) = item.stats.get(&stat) {
            let name = stat.name();
            lines.push(TooltipLine::new(
                format!("attrib attr{name}"),
                format!("+{value} [[{name}]]"),
            ));
        }
    }
    for (school, value) in &item.resist {
        let name = school.name();
        lines.push(TooltipLine::new(
            format!("resist res{name}"),
            format!("+{value} [[{name} resistance|{name} Resistance]]"),
        ));
    }
    if let Some(sockets) = &item.sockets {
        for color in &sockets.colors {
            let name = color.name();
            lines.push(TooltipLine::new(
                format!("socket sock{name}"),
                format!("[[File:UI-EmptySocket-{name}.png||link={name} socket]] [[{name} socket|{name} Socket]]"),
            ));
        }
        lines.push(TooltipLine::new(
            "socket sockBonus",
            format!("[[Socket bonus|Socket Bonus]]: {}", sockets.bonus),
        ));
    }
    if let Some(durability) = &item.durability {
        lines.push(TooltipLine::new(
            "durability",
            format!("[[Durability]] {durability} / {durability}"),
        ));
    }
    match &item.lock {
        Some(LockState::Locked) => lines.push(TooltipLine::new("locked", "[[Locked]]")),
        Some(LockState::Lockpicking(skill)) => lines.push(TooltipLine::new(
            "req reqLockpick",
            format!("Requires [[Lockpicking]] ({skill})"),
        )),
        None => {}
    }
    if let Some(bag) = &item.bag {
        let kind = bag.kind.map_or("Bag", |kind| kind.name());
        lines.push(TooltipLine::new("bag", format!("{} Slot [[{kind}]]", bag.slots)));
    }
    if !item.classes.is_empty() {
        let names: Vec<_> = item.classes.iter().map(|class| class.name()).collect();
        lines.push(TooltipLine::new(
            "req reqClass",
            format!("[[Class|Classes]]: {}", names.join(", ")),
        ));
    }
    if !item.races.is_empty() {
        let names: Vec<_> = item.races.iter().map(|race| race.name()).collect();
        lines.push(TooltipLine::new(
            "req reqRace",
            format!("[[Race|Races]]: {}", names.join(", ")),
        ));
    }
    if let Some(level) = &item.level {
        lines.push(TooltipLine::new("req Level", format!("Requires Level {level}")));
    }
    lines.push(TooltipLine::new(
        "iLvl",
        format!("[[Item level|Item Level]] {}", item.ilvl),
    ));
    if let Some(subskill) = item.subskill {
        lines.push(TooltipLine::new(
            "req reqSubskill",
            format!("Requires [[{}]]", subskill.name()),
        ));
    }
    if let Some(req) = &item.profession {
        lines.push(TooltipLine::new(
            "req reqSkill",
            format!("Requires [[{}]] ({})", req.profession.name(), req.rating),
        ));
    }
    if let Some(req) = &item.reputation {
        lines.push(TooltipLine::new(
            "req reqRep",
            format!("Requires [[{}]] – [[{}]]", req.faction, req.standing.name()),
        ));
    }
    if let Some(arena) = &item.arena {
        lines.push(TooltipLine::new(
            "req reqArena",
            format!(
                "Requires [[Arena personal rating|personal]] and [[Arena team rating|team]] arena rating of {arena}"
            ),
        ));
    }
    for onhit in &item.onhit {
        lines.push(TooltipLine::new("bonus onhit", format!("Chance on hit: {onhit}")));
    }
    for (rating, value) in &item.ratings {
        lines.push(rating_line(*rating, value.as_str()));
    }
    for equip in &item.equip {
        lines.push(TooltipLine::new("bonus equip", format!("Equip: {equip}")));
    }
    for effect in &item.use_effects {
        lines.push(TooltipLine::new("bonus use", format!("Use: {effect}")));
    }
    if let Some(recipe) = &item.recipe {
        lines.push(TooltipLine::new(
            "create",
            format!("{{{{Loot|{}|{}}}}}", recipe.quality.name(), recipe.creates),
        ));
        lines.push(TooltipLine::new("reagents", format!("Requires {}", recipe.reagents)));
    }
    if let Some(charges) = &item.charges {
        lines.push(TooltipLine::new("charges", format!("{charges} [[Charges]]")));
    }
    if let Some(flavor) = &item.flavor {
        lines.push(TooltipLine::new("flavor", format!("\"{flavor}\"")));
    }
    if item.read {
        lines.push(TooltipLine::new("bonus read", "<Right Click to Read>"));
    }
    if item.open {
        lines.push(TooltipLine::new("bonus open", "<Right Click to Open>"));
    }
    if let Some(set) = &item.set {
        if ctx.own_page {
            lines.push(
                TooltipLine::new(
                    "set",
                    format!("{{{{:{}|{}|mode=itemtip}}}}", set.page, set.name),
                )
                .styled(LineStyle::Transclusion),
            );
        } else {
            lines.push(TooltipLine::new(
                "set",
                format!("[[{}|{}]] (1/{})", set.page, set.name, set.pieces),
            ));
        }
    }
    if let Some(sell) = &item.sell {
        lines.push(TooltipLine::new("sell", format!("Sell Price: {}", sell.markup())));
    }

    lines
}

/// Renders the full tooltip markup.
///
/// On the item's own page the metadata line comes first and the tooltip
/// floats right at full size.
pub fn render_tooltip(item: &Item, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.own_page {
        out.push_str(&metadata_line(item, ctx.config));
        out.push_str("<div style=\"font-size:1em;float:right;width:18em\"");
    } else {
        out.push_str("<div style=\"font-size:0.8em;width:18em\"");
    }

    out.push_str(" class=\"itemtooltip\">\n{{Icon|");
    out.push_str(&item.icon);
    if let Some(stack) = &item.stack {
        out.push('|');
        out.push_str(stack.as_str());
    }
    out.push_str(&format!(
        "|size={}|float=right|margin=0}}}}\n<ul>\n",
        ctx.config.icon_size(ctx.own_page)
    ));

    for line in render_lines(item, ctx) {
        out.push_str(&line.to_markup());
    }
    out.push_str("</ul></div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_tooltip_core::{AttributeRecord, FinalizeOptions, apply_overrides, finalize};

    fn item(args: &[(&str, &str)]) -> Item {
        let mut record = AttributeRecord::named("Test Item");
        apply_overrides(&mut record, [("id", "1"), ("ilvl", "10")]).unwrap();
        apply_overrides(&mut record, args.iter().copied()).unwrap();
        finalize(record, &FinalizeOptions::default()).unwrap()
    }

    fn texts(item: &Item, own_page: bool) -> Vec<String> {
        let config = TooltipConfig::default();
        let ctx = RenderContext { own_page, config: &config };
        render_lines(item, &ctx).into_iter().map(|line| line.text).collect()
    }

    #[test]
    fn test_line_markup_styles() {
        let plain = TooltipLine::new("armor", "30 [[Armor]]");
        assert_eq!(plain.to_markup(), " <li class=\"armor\">30 [[Armor]]</li>\n");
        let float = TooltipLine::new("speed", "x").styled(LineStyle::FloatRight);
        assert_eq!(float.to_markup(), " <li class=\"speed\" style=\"float:right\">x</li>\n");
        let clear = TooltipLine::new("type", "y").styled(LineStyle::FloatRightClear);
        assert!(clear.to_markup().contains("style=\"float:right; clear:all\""));
        let titled = TooltipLine::new("feralAP", "z").styled(LineStyle::Titled("t".into()));
        assert_eq!(titled.to_markup(), " <li class=\"feralAP\" title=\"t\">z</li>\n");
        let set = TooltipLine::new("set", "{{:Tier|Tier|mode=itemtip}}").styled(LineStyle::Transclusion);
        assert_eq!(set.to_markup(), " {{:Tier|Tier|mode=itemtip}}\n");
    }

    #[test]
    fn test_weapon_block_order() {
        let item = item(&[
            ("dmg", "44-115"),
            ("speed", "2.60"),
            ("dps", "60"),
            ("type", "staff"),
            ("bonus", "5-10"),
            ("bonusdamageschool", "fire"),
        ]);
        let lines = texts(&item, false);
        assert_eq!(lines[1], "[[Staff]]");
        assert_eq!(lines[2], "[[Speed (attack)|Speed]] 2.60");
        assert_eq!(lines[3], "44 – 115 Damage");
        assert_eq!(lines[4], "+5 – 10 [[Magic schools (WoW)#Fire|Fire]] Damage");
        assert_eq!(lines[5], "(60 [[DPS|damage per second]])");
        assert!(lines[6].starts_with("(72.8 [[Feral attack power|"));
    }

    #[test]
    fn test_stats_render_in_fixed_order() {
        let item = item(&[("spirit", "3"), ("strength", "5"), ("fire", "7"), ("arcane", "2")]);
        let lines = texts(&item, false);
        assert_eq!(
            &lines[1..5],
            &[
                "+5 [[Strength]]",
                "+3 [[Spirit]]",
                "+7 [[Fire resistance|Fire Resistance]]",
                "+2 [[Arcane resistance|Arcane Resistance]]",
            ]
        );
    }

    #[test]
    fn test_requirement_lines() {
        let item = item(&[
            ("class", "priest warrior"),
            ("race", "ne orc"),
            ("level", "70"),
            ("skill", "tailoring"),
            ("skillrating", "375"),
            ("faction", "the aldor"),
            ("factionrating", "honored"),
        ]);
        let lines = texts(&item, false);
        assert!(lines.contains(&"[[Class|Classes]]: Warrior, Priest".to_string()));
        assert!(lines.contains(&"[[Race|Races]]: Night Elf, Orc".to_string()));
        assert!(lines.contains(&"Requires Level 70".to_string()));
        assert!(lines.contains(&"Requires [[Tailoring]] (375)".to_string()));
        assert!(lines.contains(&"Requires [[The Aldor]] – [[Honored]]".to_string()));
    }

    #[test]
    fn test_set_line_depends_on_page() {
        let item = item(&[("set", "Netherwind Regalia"), ("setpieces", "8")]);
        assert_eq!(
            texts(&item, false).last().map(String::as_str),
            Some("[[Netherwind Regalia|Netherwind Regalia]] (1/8)")
        );
        assert_eq!(
            texts(&item, true).last().map(String::as_str),
            Some("{{:Netherwind Regalia|Netherwind Regalia|mode=itemtip}}")
        );
    }

    #[test]
    fn test_tooltip_wrapper() {
        let item = item(&[("stack", "20")]);
        let config = TooltipConfig::default();
        let embedded = render_tooltip(&item, &RenderContext::for_page(&item, Some("Elsewhere"), &config));
        assert!(embedded.starts_with("<div style=\"font-size:0.8em;width:18em\" class=\"itemtooltip\">\n"));
        assert!(embedded.contains("{{Icon|Temp|20|size=4|float=right|margin=0}}\n<ul>\n"));
        assert!(embedded.ends_with("</ul></div>\n"));

        let own = render_tooltip(&item, &RenderContext::for_page(&item, Some("Test Item"), &config));
        assert!(own.starts_with("{{#set:Name=Test Item|"));
        assert!(own.contains("<div style=\"font-size:1em;float:right;width:18em\" class=\"itemtooltip\">"));
        assert!(own.contains("size=3"));
    }
}
