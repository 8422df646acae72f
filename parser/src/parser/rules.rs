//! The ordered line-classification rule table.
//!
//! Each body line is offered to [`RULES`] in order. The first rule whose
//! [`Trigger`] accepts the line and whose action consumes it wins. An action
//! that cannot read its value from the line declines it, and the line moves
//! on to the next rule. Declining actions never touch the record.

use tracing::debug;

use item_tooltip_core::{
    AttributeRecord, BagType, BindType, GlyphType, Holiday, ItemType, Number, PlayerClass,
    PrimaryStat, Profession, Quality, Race, Rating, RawRange, Result, School, Slot, SocketColor,
    Specialization, Standing, TooltipError, ValueError,
};

use super::cursor::LineCursor;
use super::layout;

/// Cheap line test deciding whether a rule is tried at all.
#[derive(Clone, Copy, Debug)]
pub enum Trigger {
    Contains(&'static str),
    StartsWith(&'static str),
    EndsWith(&'static str),
    Test(fn(&str) -> bool),
}

impl Trigger {
    pub fn accepts(&self, line: &str) -> bool {
        match self {
            Self::Contains(needle) => line.contains(needle),
            Self::StartsWith(prefix) => line.starts_with(prefix),
            Self::EndsWith(suffix) => line.ends_with(suffix),
            Self::Test(test) => test(line),
        }
    }
}

/// Outcome of running a rule action on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Consumed,
    Declined,
}

/// Signature of a line handler.
pub type Handler = fn(&str, &mut LineCursor, &mut AttributeRecord) -> Result<Handled>;

/// Presence flags set by a bare keyword line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Heroic,
    Conjured,
    QuestItem,
    Locked,
    Read,
    Open,
}

impl Flag {
    fn set(self, record: &mut AttributeRecord) {
        match self {
            Self::Heroic => record.heroic = true,
            Self::Conjured => record.conjured = true,
            Self::QuestItem => record.questitem = true,
            Self::Locked => record.locked = true,
            Self::Read => record.read = true,
            Self::Open => record.open = true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Action {
    Flag(Flag),
    Stat(PrimaryStat),
    Rating(Rating),
    /// Recognized and dropped (feral attack power is derived later).
    Ignore,
    Handler(Handler),
}

impl Action {
    fn apply(
        &self,
        line: &str,
        cursor: &mut LineCursor,
        record: &mut AttributeRecord,
    ) -> Result<Handled> {
        match self {
            Self::Flag(flag) => {
                flag.set(record);
                Ok(Handled::Consumed)
            }
            Self::Stat(stat) => Ok(primary_stat(line, *stat, record)),
            Self::Rating(rating) => Ok(fixed_rating(line, *rating, record)),
            Self::Ignore => Ok(Handled::Consumed),
            Self::Handler(handler) => handler(line, cursor, record),
        }
    }
}

/// One entry of the classification table.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub action: Action,
}

const fn rule(name: &'static str, trigger: Trigger, action: Action) -> Rule {
    Rule {
        name,
        trigger,
        action,
    }
}

use Action::{Flag as F, Handler as H, Rating as R, Stat as S};
use Trigger::{Contains, EndsWith, StartsWith, Test};

/// Classification rules in priority order.
pub static RULES: &[Rule] = &[
    rule("heroic", Contains("Heroic"), F(Flag::Heroic)),
    rule("conjured", Contains("Conjured"), F(Flag::Conjured)),
    rule("bind", Contains("Binds"), H(bind)),
    rule("quest-item", Contains("Quest Item"), F(Flag::QuestItem)),
    rule("unique", Contains("Unique"), H(unique)),
    rule("glyph", EndsWith("Glyph"), H(glyph)),
    rule("duration", Contains("Duration"), H(duration)),
    rule("quest-begin", Contains("Begins a Quest"), H(quest_begin)),
    rule("speed", Contains("Speed"), H(speed)),
    rule("damage", Contains("Damage"), H(damage)),
    rule("dps", Contains("damage per second"), H(dps)),
    rule("feral", Contains("feral attack power"), Action::Ignore),
    rule("socket", Contains("Socket"), H(socket)),
    rule("armor", Contains("Armor"), H(armor)),
    rule("block", Contains("Block"), H(block)),
    rule("strength", Contains("Strength"), S(PrimaryStat::Strength)),
    rule("agility", Contains("Agility"), S(PrimaryStat::Agility)),
    rule("stamina", Contains("Stamina"), S(PrimaryStat::Stamina)),
    rule("intellect", Contains("Intellect"), S(PrimaryStat::Intellect)),
    rule("spirit", Contains("Spirit"), S(PrimaryStat::Spirit)),
    rule("resistance", Contains("Resistance"), H(resistance)),
    rule("durability", Contains("Durability"), H(durability)),
    rule("defense", Contains("defense rating by"), R(Rating::Defense)),
    rule("dodge", Contains("dodge rating by"), R(Rating::Dodge)),
    rule("parry", Contains("parry rating by"), R(Rating::Parry)),
    rule("shield-block", Contains("shield block rating by"), R(Rating::ShieldBlock)),
    rule("haste", Contains("haste rating by"), R(Rating::Haste)),
    rule("hit", Contains("hit rating by"), R(Rating::Hit)),
    rule("crit", Contains("critical strike rating by"), R(Rating::Crit)),
    rule("resilience", Contains("resilience rating by"), R(Rating::Resilience)),
    rule("expertise", Contains("expertise rating by"), R(Rating::Expertise)),
    rule("attack-power", Contains("attack power by"), R(Rating::AttackPower)),
    rule("mp5", Contains("mana per 5 sec."), R(Rating::ManaPerFive)),
    rule("armor-penetration", Contains("armor penetration rating by"), R(Rating::ArmorPenetration)),
    rule("spell-power", Contains("spell power by"), R(Rating::SpellPower)),
    rule("locked", Contains("Locked"), F(Flag::Locked)),
    rule("lockpicking", Contains("Lockpicking"), H(lockpicking)),
    rule("bag", Contains("Bag"), H(bag)),
    rule("classes", Contains("Classes"), H(classes)),
    rule("races", Contains("Races"), H(races)),
    rule("required-level", Contains("Requires Level"), H(required_level)),
    rule("item-level", Contains("Item Level"), H(item_level)),
    rule("charges", Contains("Charges"), H(charges)),
    rule("read", Contains("Right Click to Read"), F(Flag::Read)),
    rule("open", Contains("Right Click to Open"), F(Flag::Open)),
    rule("sell-price", Contains("Sell Price"), H(sell_price)),
    rule("arena", Contains("arena"), H(arena)),
    rule("item-set", Test(layout::looks_like_set_header), H(item_set)),
    rule("recipe", StartsWith("["), H(recipe)),
    rule("flavor", StartsWith("&quot;"), H(flavor)),
    rule("chance-on-hit", StartsWith("Chance on hit:"), H(chance_on_hit)),
    rule("equip", StartsWith("Equip:"), H(equip)),
    rule("use", StartsWith("Use:"), H(use_effect)),
    rule("requires", Contains("Requires"), H(requires)),
    rule("item-type", Test(is_item_type), H(item_type)),
    rule("slot", Test(is_slot), H(slot)),
];

/// Offers `line` to each rule in turn; returns the name of the rule that
/// consumed it, or `None` when the line is residue.
pub fn classify(
    line: &str,
    cursor: &mut LineCursor,
    record: &mut AttributeRecord,
) -> Result<Option<&'static str>> {
    for rule in RULES {
        if !rule.trigger.accepts(line) {
            continue;
        }
        match rule.action.apply(line, cursor, record)? {
            Handled::Consumed => {
                debug!(rule = rule.name, line, "Classified tooltip line");
                return Ok(Some(rule.name));
            }
            Handled::Declined => debug!(rule = rule.name, line, "Rule declined line"),
        }
    }
    Ok(None)
}

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn consumed_if(read: bool) -> Handled {
    if read {
        Handled::Consumed
    } else {
        Handled::Declined
    }
}

fn primary_stat(line: &str, stat: PrimaryStat, record: &mut AttributeRecord) -> Handled {
    let value = line
        .strip_suffix(stat.name())
        .map(|rest| rest.trim().trim_start_matches('+'))
        .and_then(Number::parse);
    if let Some(value) = &value {
        record.stats.insert(stat, value.clone());
    }
    consumed_if(value.is_some())
}

fn fixed_rating(line: &str, rating: Rating, record: &mut AttributeRecord) -> Handled {
    let value = layout::first_integer(line).and_then(Number::parse);
    if let Some(value) = &value {
        record.ratings.insert(rating, value.clone());
    }
    consumed_if(value.is_some())
}

fn bind(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let word = tokens(line).get(2).copied().unwrap_or(line);
    let bind = BindType::lookup(word)
        .ok_or_else(|| ValueError::invalid("bind", "one of the four bind types", word))?;
    record.bind = Some(bind);
    Ok(Handled::Consumed)
}

fn unique(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let words = tokens(line);
    match words.as_slice() {
        ["Unique"] => record.unique = true,
        ["Unique", count, ..] => {
            let Some(count) = Number::parse(count.trim_start_matches('(').trim_end_matches(')'))
            else {
                return Ok(Handled::Declined);
            };
            record.unique_n = Some(count);
        }
        ["Unique-Equipped"] => record.unique_eq = true,
        ["Unique-Equipped", ..] => {
            let rest = layout::text_after(line, "Unique-Equipped").unwrap_or_default();
            let limit = match layout::parenthesized(rest) {
                Some(inner) if rest.starts_with('(') => inner,
                _ => rest.trim_start_matches(':').trim(),
            };
            record.unique_eq_n = Some(limit.to_string());
        }
        [first, ..] if first.starts_with("Unique-Equipped:") => {
            let rest = layout::text_after(line, "Unique-Equipped:").unwrap_or_default();
            if rest.is_empty() {
                record.unique_eq = true;
            } else {
                record.unique_eq_n = Some(rest.to_string());
            }
        }
        _ => return Ok(Handled::Declined),
    }
    Ok(Handled::Consumed)
}

fn glyph(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let glyph = GlyphType::from_line(line).ok_or_else(|| {
        TooltipError::parse(
            "Glyphs are either \"Major Glyph\" or \"Minor Glyph\"",
            "Major Glyph",
        )
    })?;
    record.glyph = Some(glyph);
    Ok(Handled::Consumed)
}

fn duration(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = layout::text_after(line, "Duration")
        .map(|rest| rest.trim_start_matches(':').trim())
        .filter(|rest| !rest.is_empty());
    if let Some(value) = value {
        record.duration = Some(value.to_string());
    }
    Ok(consumed_if(value.is_some()))
}

fn quest_begin(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let quest = layout::text_after(line, "Begins a Quest").unwrap_or_default();
    if quest.is_empty() {
        return Err(TooltipError::parse(
            "Please add the started quest to the \"This Item Begins a Quest\" line",
            "This Item Begins a Quest Your Place in the World",
        ));
    }
    record.qbegin = Some(quest.to_string());
    Ok(Handled::Consumed)
}

fn speed(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = line
        .strip_prefix("Speed")
        .map(str::trim)
        .filter(|value| Number::parse(value).is_some());
    if let Some(value) = value {
        record.speed = Some(value.to_string());
    }
    Ok(consumed_if(value.is_some()))
}

fn damage(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let Some(dmg) = layout::damage_line(line) else {
        return Ok(Handled::Declined);
    };
    let range = RawRange::new(dmg.low, dmg.high);
    if dmg.bonus {
        record.bdmg = Some(range);
        if dmg.school.is_some() {
            record.bonus_damage_school = dmg.school;
        }
    } else {
        record.dmg = Some(range);
        if dmg.school.is_some() {
            record.damage_school = dmg.school;
        }
    }
    Ok(Handled::Consumed)
}

fn dps(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = tokens(line)
        .first()
        .map(|first| first.trim_start_matches('('))
        .filter(|value| Number::parse(value).is_some());
    if let Some(value) = value {
        record.dps = Some(value.to_string());
    }
    Ok(consumed_if(value.is_some()))
}

fn socket(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    if let Some(rest) = line.strip_prefix("Socket Bonus") {
        record.sockbonus = Some(rest.trim_start_matches(':').trim().to_string());
        return Ok(Handled::Consumed);
    }
    let color = line
        .chars()
        .next()
        .and_then(|first| SocketColor::lookup(&first.to_string()));
    if let Some(color) = color {
        record.socket.push(color);
    }
    Ok(consumed_if(color.is_some()))
}

fn suffixed_number(line: &str, suffix: &str) -> Option<Number> {
    line.strip_suffix(suffix).and_then(Number::parse)
}

fn armor(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = suffixed_number(line, "Armor");
    let read = value.is_some();
    if read {
        record.armor = value;
    }
    Ok(consumed_if(read))
}

fn block(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = suffixed_number(line, "Block");
    let read = value.is_some();
    if read {
        record.block = value;
    }
    Ok(consumed_if(read))
}

fn resistance(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let words = tokens(line);
    let school = words.get(1).and_then(|word| School::lookup(word));
    let value = words
        .first()
        .and_then(|word| Number::parse(word.trim_start_matches('+')));
    match (school, value) {
        (Some(school), Some(value)) => {
            record.resist.insert(school, value);
            Ok(Handled::Consumed)
        }
        _ => Ok(Handled::Declined),
    }
}

fn durability(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let words = tokens(line);
    let value = words.get(1).and_then(|word| {
        Number::parse(word).or_else(|| {
            word.split_once('/')
                .and_then(|(_, max)| Number::parse(max))
        })
    });
    let read = value.is_some();
    if read {
        record.durability = value;
    }
    Ok(consumed_if(read))
}

fn lockpicking(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = layout::parenthesized(line).and_then(Number::parse);
    let read = value.is_some();
    if read {
        record.lockpick = value;
    }
    Ok(consumed_if(read))
}

fn bag(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let words = tokens(line);
    let Some(slots) = words.first().and_then(|word| Number::parse(word)) else {
        return Ok(Handled::Declined);
    };
    record.bagslots = Some(slots);
    if let Some(kind) = words.get(2).and_then(|word| BagType::lookup(word)) {
        record.bagtype = Some(kind);
    }
    Ok(Handled::Consumed)
}

fn classes(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let mut found = Vec::new();
    for word in tokens(line).into_iter().skip(1) {
        if matches!(word, "Knight" | "Knight,") {
            continue;
        }
        let class = PlayerClass::lookup(word)
            .ok_or_else(|| ValueError::invalid("class", "one of the playable classes", line))?;
        found.push(class);
    }
    record.class.extend(found);
    Ok(Handled::Consumed)
}

fn races(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let mut found = Vec::new();
    for word in tokens(line).into_iter().skip(1) {
        if matches!(word, "Elf" | "Elf,") {
            continue;
        }
        let race = Race::lookup(word)
            .ok_or_else(|| ValueError::invalid("race", "one of the playable races", word))?;
        found.push(race);
    }
    record.race.extend(found);
    Ok(Handled::Consumed)
}

fn required_level(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = layout::text_after(line, "Requires Level").and_then(Number::parse);
    let read = value.is_some();
    if read {
        record.level = value;
    }
    Ok(consumed_if(read))
}

fn item_level(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = layout::text_after(line, "Item Level").filter(|value| Number::parse(value).is_some());
    if let Some(value) = value {
        record.ilvl = Some(value.to_string());
    }
    Ok(consumed_if(value.is_some()))
}

fn charges(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = tokens(line).first().and_then(|word| Number::parse(word));
    let read = value.is_some();
    if read {
        record.charges = value;
    }
    Ok(consumed_if(read))
}

fn sell_price(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let price = layout::text_after(line, "Sell Price").and_then(layout::sell_price);
    let read = price.is_some();
    if read {
        record.sell = price;
    }
    Ok(consumed_if(read))
}

fn arena(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let value = tokens(line).last().and_then(|word| Number::parse(word));
    let read = value.is_some();
    if read {
        record.arena = value;
    }
    Ok(consumed_if(read))
}

fn item_set(line: &str, cursor: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let (name, pieces) = layout::set_header(line).ok_or_else(|| {
        TooltipError::parse(
            "Please define the size of the equipment set on the same line",
            "Netherwind Regalia (0/8)",
        )
    })?;

    let members = cursor.skip_lines(pieces);
    let bonuses = cursor.skip_lines_while(|next| next.starts_with('('));
    debug!(set = %name, members, bonuses, "Skipped item-set block");

    record.set = Some(name);
    record.setpieces = Number::parse(&pieces.to_string());
    Ok(Handled::Consumed)
}

fn recipe(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let missing_quality = || {
        TooltipError::parse(
            "Please add the created item's quality to the end of the line where it is listed.",
            "[Heavy Runecloth Bandage] common",
        )
    };
    let end = line.find(']').ok_or_else(missing_quality)?;
    let quality = tokens(line)
        .last()
        .and_then(|word| Quality::lookup(word))
        .ok_or_else(missing_quality)?;

    record.create = Some(line[1..end].to_string());
    record.createq = Some(quality);
    Ok(Handled::Consumed)
}

fn flavor(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let inner = line.strip_prefix("&quot;").unwrap_or(line);
    let inner = inner.strip_suffix("&quot;").unwrap_or(inner);
    record.flavor = Some(inner.to_string());
    Ok(Handled::Consumed)
}

fn chance_on_hit(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    record.onhit.push(effect_text(line, "Chance on hit:"));
    Ok(Handled::Consumed)
}

fn equip(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    record.equip.push(effect_text(line, "Equip:"));
    Ok(Handled::Consumed)
}

fn use_effect(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    record.use_effects.push(effect_text(line, "Use:"));
    Ok(Handled::Consumed)
}

fn effect_text(line: &str, prefix: &str) -> String {
    line.strip_prefix(prefix).unwrap_or(line).trim().to_string()
}

/// `Requires ...` lines, tried as holiday, specialization, profession,
/// reputation and finally reagents.
fn requires(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    let words: Vec<&str> = layout::text_after(line, "Requires")
        .unwrap_or_default()
        .split_whitespace()
        .collect();
    let (Some(first), Some(last)) = (words.first().copied(), words.last().copied()) else {
        return Ok(Handled::Declined);
    };

    if let Some(holiday) = Holiday::lookup(first) {
        record.holiday = Some(holiday);
    } else if let Some(subskill) = Specialization::lookup(first) {
        record.subskill = Some(subskill);
    } else if let Some(profession) = Profession::lookup(first) {
        let rating = layout::first_integer(last).and_then(Number::parse).ok_or_else(|| {
            TooltipError::parse(
                "Please add the numeric profession requirement to the end of the line where it is listed.",
                format!("Requires {} (400)", profession.name()),
            )
        })?;
        record.skill = Some(profession);
        record.skillrating = Some(rating);
    } else if let Some(faction) = reputation(&words) {
        record.faction = Some(faction.0);
        record.factionrating = Some(faction.1);
    } else {
        record.reagents = Some(words.join(" "));
    }
    Ok(Handled::Consumed)
}

/// `Requires <Faction> - <Standing>`.
fn reputation(words: &[&str]) -> Option<(String, Standing)> {
    let (last, rest) = words.split_last()?;
    let standing = Standing::lookup(last)?;
    let rest = match rest.split_last() {
        Some((dash, before)) if matches!(*dash, "-" | "–") => before,
        _ => rest,
    };
    if rest.is_empty() {
        return None;
    }
    Some((rest.join(" "), standing))
}

fn is_item_type(line: &str) -> bool {
    ItemType::lookup(line).is_some()
}

fn is_slot(line: &str) -> bool {
    Slot::lookup(line).is_some()
}

fn item_type(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    record.item_type = ItemType::lookup(line);
    Ok(consumed_if(record.item_type.is_some()))
}

fn slot(line: &str, _: &mut LineCursor, record: &mut AttributeRecord) -> Result<Handled> {
    record.slot = Slot::lookup(line);
    Ok(consumed_if(record.slot.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::IndexedLine;

    fn run(line: &str) -> Result<(Option<&'static str>, AttributeRecord)> {
        let mut cursor = LineCursor::new(Vec::new());
        let mut record = AttributeRecord::new();
        let rule = classify(line, &mut cursor, &mut record)?;
        Ok((rule, record))
    }

    fn rule_of(line: &str) -> Option<&'static str> {
        run(line).unwrap().0
    }

    fn position(name: &str) -> usize {
        RULES.iter().position(|rule| rule.name == name).unwrap()
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|rule| rule.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn test_priority_order() {
        assert!(position("socket") < position("stamina"));
        assert!(position("damage") < position("dps"));
        assert!(position("lockpicking") < position("requires"));
        assert!(position("required-level") < position("requires"));
        assert!(position("item-set") < position("recipe"));
        assert!(position("item-type") < position("slot"));
        assert_eq!(RULES.first().map(|r| r.name), Some("heroic"));
        assert_eq!(RULES.last().map(|r| r.name), Some("slot"));
    }

    #[test]
    fn test_socket_bonus_wins_over_stat() {
        let (rule, record) = run("Socket Bonus: +4 Stamina").unwrap();
        assert_eq!(rule, Some("socket"));
        assert_eq!(record.sockbonus.as_deref(), Some("+4 Stamina"));
        assert!(record.stats.is_empty());
    }

    #[test]
    fn test_declined_stat_falls_through_to_use() {
        let (rule, record) = run("Use: Restores 100 Stamina").unwrap();
        assert_eq!(rule, Some("use"));
        assert_eq!(record.use_effects, vec!["Restores 100 Stamina".to_string()]);
        assert!(record.stats.is_empty());
    }

    #[test]
    fn test_declined_damage_falls_through_to_onhit() {
        let (rule, record) = run("Chance on hit: Blasts the enemy for 100 Fire Damage.").unwrap();
        assert_eq!(rule, Some("chance-on-hit"));
        assert!(record.dmg.is_none());
        assert_eq!(record.onhit.len(), 1);
    }

    #[test]
    fn test_bind_line() {
        let (_, record) = run("Binds when picked up").unwrap();
        assert_eq!(record.bind, Some(BindType::OnPickup));
        let (_, record) = run("Binds to account").unwrap();
        assert_eq!(record.bind, Some(BindType::ToAccount));
    }

    #[test]
    fn test_unknown_bind_is_value_error() {
        let err = run("Binds when sold").unwrap_err();
        assert_eq!(
            err,
            TooltipError::Value(ValueError::invalid("bind", "one of the four bind types", "sold"))
        );
    }

    #[test]
    fn test_unique_forms() {
        assert!(run("Unique").unwrap().1.unique);
        assert_eq!(
            run("Unique (20)").unwrap().1.unique_n.map(|n| n.to_string()),
            Some("20".to_string())
        );
        assert!(run("Unique-Equipped").unwrap().1.unique_eq);
        assert_eq!(
            run("Unique-Equipped: Jewelcrafter's Gems (3)").unwrap().1.unique_eq_n.as_deref(),
            Some("Jewelcrafter's Gems (3)")
        );
        assert_eq!(
            run("Unique-Equipped (2)").unwrap().1.unique_eq_n.as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_glyph_requires_major_or_minor() {
        assert_eq!(run("Minor Glyph").unwrap().1.glyph, Some(GlyphType::Minor));
        let err = run("Prime Glyph").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_quest_begin_needs_quest_name() {
        let (_, record) = run("This Item Begins a Quest Your Place in the World").unwrap();
        assert_eq!(record.qbegin.as_deref(), Some("Your Place in the World"));
        assert!(run("This Item Begins a Quest").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_weapon_lines() {
        let (_, record) = run("Speed 2.60").unwrap();
        assert_eq!(record.speed.as_deref(), Some("2.60"));
        let (_, record) = run("(72.8 damage per second)").unwrap();
        assert_eq!(record.dps.as_deref(), Some("72.8"));
        let (_, record) = run("+10 - 20 Arcane Damage").unwrap();
        assert_eq!(record.bdmg, Some(RawRange::new("10", "20")));
        assert_eq!(record.bonus_damage_school, Some(School::Arcane));
        assert!(record.dmg.is_none());
        assert_eq!(rule_of("(Adds 27.50 damage per second)"), None);
        assert_eq!(rule_of("Increases feral attack power by 300"), Some("feral"));
    }

    #[test]
    fn test_stat_and_resist_lines() {
        let (_, record) = run("+15 Stamina").unwrap();
        assert_eq!(record.stats[&PrimaryStat::Stamina].as_str(), "15");
        let (_, record) = run("+10 Fire Resistance").unwrap();
        assert_eq!(record.resist[&School::Fire].as_str(), "10");
        let (_, record) = run("1200 Armor").unwrap();
        assert_eq!(record.armor.map(|n| n.to_string()), Some("1200".into()));
        let (_, record) = run("45 Block").unwrap();
        assert_eq!(record.block.map(|n| n.to_string()), Some("45".into()));
    }

    #[test]
    fn test_durability_layouts() {
        let (_, spaced) = run("Durability 100 / 100").unwrap();
        assert_eq!(spaced.durability.map(|n| n.to_string()), Some("100".into()));
        let (_, compact) = run("Durability 55/120").unwrap();
        assert_eq!(compact.durability.map(|n| n.to_string()), Some("120".into()));
    }

    #[test]
    fn test_rating_lines_take_first_integer() {
        let (rule, record) = run("Equip: Increases your dodge rating by 24.").unwrap();
        assert_eq!(rule, Some("dodge"));
        assert_eq!(record.ratings[&Rating::Dodge].as_str(), "24");
        assert_eq!(
            rule_of("Equip: Improves critical strike rating by 18."),
            Some("crit")
        );
        assert_eq!(rule_of("Equip: Restores 6 mana per 5 sec."), Some("mp5"));
        assert_eq!(
            rule_of("Equip: Increases your shield block rating by 10."),
            Some("shield-block")
        );
    }

    #[test]
    fn test_lock_and_bag_lines() {
        assert!(run("Locked").unwrap().1.locked);
        let (_, record) = run("Requires Lockpicking (300)").unwrap();
        assert_eq!(record.lockpick.map(|n| n.to_string()), Some("300".into()));
        let (_, record) = run("24 Slot Herb Bag").unwrap();
        assert_eq!(record.bagslots.map(|n| n.to_string()), Some("24".into()));
        assert_eq!(record.bagtype, Some(BagType::Herbalism));
        let (_, record) = run("16 Slot Bag").unwrap();
        assert_eq!(record.bagtype, None);
    }

    #[test]
    fn test_class_and_race_lists() {
        let (_, record) = run("Classes: Death Knight, Paladin").unwrap();
        assert_eq!(
            record.class.into_iter().collect::<Vec<_>>(),
            vec![PlayerClass::DeathKnight, PlayerClass::Paladin]
        );
        let (_, record) = run("Races: Night Elf, Blood Elf").unwrap();
        assert_eq!(
            record.race.into_iter().collect::<Vec<_>>(),
            vec![Race::BloodElf, Race::NightElf]
        );
        let err = run("Races: Murloc").unwrap_err();
        assert_eq!(
            err,
            TooltipError::Value(ValueError::invalid("race", "one of the playable races", "Murloc"))
        );
        assert!(run("Classes: Monk").is_err());
    }

    #[test]
    fn test_level_and_charges() {
        let (_, record) = run("Requires Level 70").unwrap();
        assert_eq!(record.level.map(|n| n.to_string()), Some("70".into()));
        let (_, record) = run("Item Level 115").unwrap();
        assert_eq!(record.ilvl.as_deref(), Some("115"));
        let (_, record) = run("5 Charges").unwrap();
        assert_eq!(record.charges.map(|n| n.to_string()), Some("5".into()));
    }

    #[test]
    fn test_arena_rating() {
        let (rule, record) =
            run("Requires personal and team arena rating of 1850").unwrap();
        assert_eq!(rule, Some("arena"));
        assert_eq!(record.arena.map(|n| n.to_string()), Some("1850".into()));
    }

    #[test]
    fn test_item_set_skips_members_and_bonuses() {
        let lines = ["Helm", "Robe", "(2) Set: +10 Spirit", "(4) Set: +20 Spirit", "Sell Price: 1g"]
            .iter()
            .enumerate()
            .map(|(index, text)| IndexedLine {
                index,
                text: text.to_string(),
            })
            .collect();
        let mut cursor = LineCursor::new(lines);
        let mut record = AttributeRecord::new();
        let rule = classify("Tier Regalia (0/2)", &mut cursor, &mut record).unwrap();
        assert_eq!(rule, Some("item-set"));
        assert_eq!(record.set.as_deref(), Some("Tier Regalia"));
        assert_eq!(record.setpieces.map(|n| n.to_string()), Some("2".into()));
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_item_set_without_size() {
        let err = run("Tier Regalia / Raiment").unwrap_err();
        assert_eq!(
            err,
            TooltipError::parse(
                "Please define the size of the equipment set on the same line",
                "Netherwind Regalia (0/8)"
            )
        );
    }

    #[test]
    fn test_recipe_header() {
        let (_, record) = run("[Heavy Runecloth Bandage] common").unwrap();
        assert_eq!(record.create.as_deref(), Some("Heavy Runecloth Bandage"));
        assert_eq!(record.createq, Some(Quality::Common));
        let err = run("[Heavy Runecloth Bandage]").unwrap_err();
        assert!(err.to_string().contains("[Heavy Runecloth Bandage] common"));
    }

    #[test]
    fn test_flavor_text() {
        let (_, record) = run("&quot;Smells faintly of cinnamon.&quot;").unwrap();
        assert_eq!(record.flavor.as_deref(), Some("Smells faintly of cinnamon."));
    }

    #[test]
    fn test_requires_disambiguation() {
        assert_eq!(run("Requires Brewfest").unwrap().1.holiday, Some(Holiday::Brewfest));
        assert_eq!(
            run("Requires Gnomish Engineer").unwrap().1.subskill,
            Some(Specialization::GnomishEngineering)
        );

        let (_, record) = run("Requires Blacksmithing (400)").unwrap();
        assert_eq!(record.skill, Some(Profession::Blacksmithing));
        assert_eq!(record.skillrating.map(|n| n.to_string()), Some("400".into()));

        let (_, record) = run("Requires Cenarion Expedition - Honored").unwrap();
        assert_eq!(record.faction.as_deref(), Some("Cenarion Expedition"));
        assert_eq!(record.factionrating, Some(Standing::Honored));

        let (_, record) = run("Requires Linen Cloth (2), Coarse Thread").unwrap();
        assert_eq!(record.reagents.as_deref(), Some("Linen Cloth (2), Coarse Thread"));
    }

    #[test]
    fn test_profession_without_rating() {
        let err = run("Requires Tailoring").unwrap_err();
        assert_eq!(
            err,
            TooltipError::parse(
                "Please add the numeric profession requirement to the end of the line where it is listed.",
                "Requires Tailoring (400)"
            )
        );
    }

    #[test]
    fn test_type_and_slot_lines() {
        assert_eq!(run("Staff").unwrap().1.item_type, Some(ItemType::Staff));
        assert_eq!(run("Two-Hand").unwrap().1.slot, Some(Slot::TwoHand));
        assert_eq!(rule_of("Dungeon Bound"), None);
    }
}
