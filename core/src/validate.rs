//! Cross-field validation and normalization.
//!
//! [`finalize`] is the single gate between a draft [`AttributeRecord`] and a
//! renderable [`Item`]. Checks run in a fixed order and the first violation
//! wins:
//!
//! 1. mandatory `name`, numeric `id` and numeric `ilvl`
//! 2. defaults for `itempage`, `icon` and `quality`
//! 3. weapon group, feral attack power, then bonus damage
//! 4. recipe, socket, reputation and profession groups
//! 5. bag type needs bag slots, set needs set size
//! 6. collapsing of implicit defaults (`level 1`, `1 charge`, `Unique (1)`)
//! 7. a single leftover body line becomes the location bind
//!
//! # Examples
//!
//! ```
//! use item_tooltip_core::*;
//!
//! let mut record = AttributeRecord::named("Corrupted Ashbringer");
//! apply_overrides(&mut record, [("id", "50783"), ("ilvl", "284"), ("quality", "legendary")]).unwrap();
//!
//! let item = finalize(record, &FinalizeOptions::default()).unwrap();
//! assert_eq!(item.quality, Quality::Legendary);
//! assert_eq!(item.itempage, "Corrupted Ashbringer");
//! assert_eq!(item.icon, "Temp");
//!
//! let err = finalize(AttributeRecord::named("Nameless"), &FinalizeOptions::default()).unwrap_err();
//! assert_eq!(err, TooltipError::Value(ValueError::MissingMandatory));
//! ```

use tracing::debug;

use crate::error::{Result, ValueError};
use crate::tables::{Quality, School};
use crate::types::{
    AttributeRecord, Bag, Damage, Item, LockState, Number, ProfessionRequirement, RawRange,
    Recipe, ReputationRequirement, Residue, SetMembership, Sockets, Uniqueness, Weapon,
};

/// DPS above which staves, maces and polearms grant feral attack power.
pub const FERAL_DPS_THRESHOLD: f64 = 54.8;

/// Feral attack power granted per point of DPS above the threshold.
const FERAL_AP_PER_DPS: f64 = 14.0;

/// Knobs for [`finalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeOptions {
    /// Icon used when the record names none.
    pub placeholder_icon: String,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        Self {
            placeholder_icon: "Temp".to_string(),
        }
    }
}

/// Validates `record` and converts it into an [`Item`].
///
/// # Errors
///
/// Returns the first [`ValueError`] in check order. No partial item is
/// produced.
pub fn finalize(record: AttributeRecord, options: &FinalizeOptions) -> Result<Item> {
    let AttributeRecord {
        name,
        id,
        ilvl,
        itempage,
        icon,
        stack,
        quality,
        heroic,
        conjured,
        questitem,
        locked,
        read,
        open,
        holiday,
        mut locationbind,
        bind,
        unique,
        unique_n,
        unique_eq,
        unique_eq_n,
        glyph,
        duration,
        qbegin,
        item_type,
        slot,
        speed,
        dmg,
        damage_school,
        dps,
        bdmg,
        bonus_damage_school,
        armor,
        block,
        stats,
        resist,
        socket,
        sockbonus,
        durability,
        lockpick,
        bagslots,
        bagtype,
        class,
        race,
        level,
        subskill,
        skill,
        skillrating,
        faction,
        factionrating,
        arena,
        onhit,
        ratings,
        equip,
        use_effects,
        create,
        createq,
        reagents,
        charges,
        flavor,
        set,
        setpieces,
        setpage,
        sell,
        mut undef,
    } = record;

    let (Some(name), Some(id), Some(ilvl)) = (
        name,
        id.as_deref().and_then(Number::parse),
        ilvl.as_deref().and_then(Number::parse),
    ) else {
        return Err(ValueError::MissingMandatory.into());
    };

    let itempage = itempage.unwrap_or_else(|| name.clone());
    let icon = icon.unwrap_or_else(|| options.placeholder_icon.clone());
    let quality = quality.unwrap_or(Quality::Poor);

    let mut weapon = weapon_group(dmg, speed, dps, damage_school)?;
    if let Some(weapon) = weapon.as_mut() {
        if item_type.is_some_and(|t| t.grants_feral_attack_power()) {
            weapon.feral_attack_power = feral_attack_power(weapon.dps.value());
        }
    }
    if let Some(range) = bdmg {
        let Some(weapon) = weapon.as_mut() else {
            return Err(ValueError::BonusDamageWithoutWeapon.into());
        };
        let (low, high) = numeric_range(&range).ok_or(ValueError::IncompleteBonusDamage)?;
        weapon.bonus = Some(Damage {
            low,
            high,
            school: bonus_damage_school,
        });
    }

    let recipe = match (create, createq, reagents) {
        (Some(creates), Some(quality), Some(reagents)) => Some(Recipe {
            creates,
            quality,
            reagents,
        }),
        (None, None, None) => None,
        _ => return Err(ValueError::IncompleteRecipe.into()),
    };

    let sockets = match (socket.is_empty(), sockbonus) {
        (false, Some(bonus)) => Some(Sockets {
            colors: socket,
            bonus,
        }),
        (true, None) => None,
        _ => return Err(ValueError::IncompleteSocket.into()),
    };

    let reputation = match (faction, factionrating) {
        (Some(faction), Some(standing)) => Some(ReputationRequirement { faction, standing }),
        (None, None) => None,
        _ => return Err(ValueError::IncompleteReputation.into()),
    };

    let profession = match (skill, skillrating) {
        (Some(profession), Some(rating)) => Some(ProfessionRequirement { profession, rating }),
        (None, None) => None,
        _ => return Err(ValueError::IncompleteProfession.into()),
    };

    let bag = match (bagslots, bagtype) {
        (Some(slots), kind) => Some(Bag { slots, kind }),
        (None, Some(_)) => return Err(ValueError::BagTypeWithoutSlots.into()),
        (None, None) => None,
    };

    let set = match (set, setpieces) {
        (Some(set_name), Some(pieces)) => Some(SetMembership {
            page: setpage.unwrap_or_else(|| set_name.clone()),
            name: set_name,
            pieces,
        }),
        (Some(_), None) => return Err(ValueError::SetWithoutPieces.into()),
        (None, _) => None,
    };

    let level = level.filter(|level| !level.is_one());
    let charges = charges.filter(|charges| !charges.is_one());
    let uniqueness = uniqueness(unique, unique_n, unique_eq, unique_eq_n);

    let lock = if locked {
        Some(LockState::Locked)
    } else {
        lockpick.map(LockState::Lockpicking)
    };

    if locationbind.is_none() && undef.len() == 1 && undef[0].is_line() {
        if let Some(Residue::Line { text }) = undef.pop() {
            debug!(line = %text, "single leftover line used as location bind");
            locationbind = Some(text);
        }
    }

    Ok(Item {
        name,
        id,
        ilvl,
        itempage,
        icon,
        stack,
        quality,
        heroic,
        conjured,
        questitem,
        read,
        open,
        holiday,
        locationbind,
        bind,
        uniqueness,
        glyph,
        duration,
        qbegin,
        item_type,
        slot,
        weapon,
        armor,
        block,
        stats,
        resist,
        sockets,
        durability,
        lock,
        bag,
        classes: class,
        races: race,
        level,
        subskill,
        profession,
        reputation,
        arena,
        onhit,
        ratings,
        equip,
        use_effects,
        recipe,
        charges,
        flavor,
        set,
        sell,
        undef,
    })
}

fn numeric_range(range: &RawRange) -> Option<(Number, Number)> {
    let low = range.low.as_deref().and_then(Number::parse)?;
    let high = range.high.as_deref().and_then(Number::parse)?;
    Some((low, high))
}

/// Builds the weapon block when damage, speed and dps are all numeric.
fn weapon_group(
    dmg: Option<RawRange>,
    speed: Option<String>,
    dps: Option<String>,
    school: Option<School>,
) -> Result<Option<Weapon>> {
    if dmg.is_none() && speed.is_none() && dps.is_none() {
        return Ok(None);
    }
    let damage = dmg.as_ref().and_then(numeric_range);
    let speed = speed.as_deref().and_then(Number::parse);
    let dps = dps.as_deref().and_then(Number::parse);
    match (damage, speed, dps) {
        (Some((low, high)), Some(speed), Some(dps)) => Ok(Some(Weapon {
            speed,
            damage: Damage { low, high, school },
            dps,
            bonus: None,
            feral_attack_power: None,
        })),
        _ => Err(ValueError::IncompleteWeapon.into()),
    }
}

/// `(dps - 54.8) * 14`, rounded to two decimals, for DPS above the threshold.
///
/// # Examples
///
/// ```
/// use item_tooltip_core::feral_attack_power;
///
/// assert_eq!(feral_attack_power(60.0), Some(72.8));
/// assert_eq!(feral_attack_power(54.8), None);
/// ```
pub fn feral_attack_power(dps: f64) -> Option<f64> {
    (dps > FERAL_DPS_THRESHOLD)
        .then(|| ((dps - FERAL_DPS_THRESHOLD) * FERAL_AP_PER_DPS * 100.0).round() / 100.0)
}

fn uniqueness(
    unique: bool,
    unique_n: Option<Number>,
    unique_eq: bool,
    unique_eq_n: Option<String>,
) -> Option<Uniqueness> {
    if unique {
        return Some(Uniqueness::Unique);
    }
    if let Some(count) = unique_n {
        return Some(if count.is_one() {
            Uniqueness::Unique
        } else {
            Uniqueness::Limited(count)
        });
    }
    if unique_eq {
        return Some(Uniqueness::Equipped);
    }
    unique_eq_n.map(|text| {
        if text.trim() == "1" {
            Uniqueness::Equipped
        } else {
            Uniqueness::EquippedLimited(text)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TooltipError;
    use crate::merge::apply_overrides;
    use crate::tables::{BagType, ItemType, PlayerClass, SocketColor};

    fn base() -> AttributeRecord {
        let mut record = AttributeRecord::named("Test");
        record.id = Some("1".into());
        record.ilvl = Some("10".into());
        record
    }

    fn finalize_with(args: &[(&str, &str)]) -> Result<Item> {
        let mut record = base();
        apply_overrides(&mut record, args.iter().copied())?;
        finalize(record, &FinalizeOptions::default())
    }

    fn value_error(result: Result<Item>) -> ValueError {
        match result {
            Err(TooltipError::Value(err)) => err,
            other => panic!("expected value error, got {other:?}"),
        }
    }

    #[test]
    fn test_mandatory_fields() {
        let mut no_id = base();
        no_id.id = None;
        assert_eq!(
            value_error(finalize(no_id, &FinalizeOptions::default())),
            ValueError::MissingMandatory
        );

        let mut text_ilvl = base();
        text_ilvl.ilvl = Some("high".into());
        assert_eq!(
            value_error(finalize(text_ilvl, &FinalizeOptions::default())),
            ValueError::MissingMandatory
        );

        let mut weapon_without_name = base();
        weapon_without_name.name = None;
        weapon_without_name.speed = Some("2.60".into());
        assert_eq!(
            value_error(finalize(weapon_without_name, &FinalizeOptions::default())),
            ValueError::MissingMandatory
        );
    }

    #[test]
    fn test_defaults() {
        let item = finalize(base(), &FinalizeOptions::default()).unwrap();
        assert_eq!(item.itempage, "Test");
        assert_eq!(item.icon, "Temp");
        assert_eq!(item.quality, Quality::Poor);

        let options = FinalizeOptions {
            placeholder_icon: "Inv_misc_questionmark".into(),
        };
        assert_eq!(finalize(base(), &options).unwrap().icon, "Inv_misc_questionmark");
    }

    #[test]
    fn test_weapon_group_all_or_nothing() {
        let err = value_error(finalize_with(&[("dmg", "44 - 88"), ("speed", "2.60")]));
        assert_eq!(err, ValueError::IncompleteWeapon);

        let err = value_error(finalize_with(&[("dmg", "44-x"), ("speed", "2.60"), ("dps", "25.4")]));
        assert_eq!(err, ValueError::IncompleteWeapon);

        let item = finalize_with(&[("dmg", "44-88"), ("speed", "2.60"), ("dps", "25.4")]).unwrap();
        let weapon = item.weapon.unwrap();
        assert_eq!(weapon.speed.as_str(), "2.60");
        assert_eq!(weapon.damage.low.as_str(), "44");
        assert_eq!(weapon.feral_attack_power, None);
    }

    #[test]
    fn test_feral_attack_power_for_staves() {
        let item = finalize_with(&[
            ("type", "staff"),
            ("dmg", "100-200"),
            ("speed", "3.00"),
            ("dps", "60.0"),
        ])
        .unwrap();
        assert_eq!(item.item_type, Some(ItemType::Staff));
        assert_eq!(item.weapon.unwrap().feral_attack_power, Some(72.8));

        let sword = finalize_with(&[
            ("type", "sword"),
            ("dmg", "100-200"),
            ("speed", "3.00"),
            ("dps", "60.0"),
        ])
        .unwrap();
        assert_eq!(sword.weapon.unwrap().feral_attack_power, None);
    }

    #[test]
    fn test_bonus_damage_needs_weapon() {
        let err = value_error(finalize_with(&[("bonus", "5-10")]));
        assert_eq!(err, ValueError::BonusDamageWithoutWeapon);

        let item = finalize_with(&[
            ("dmg", "44-88"),
            ("speed", "2.60"),
            ("dps", "25.4"),
            ("bonus", "5-10"),
            ("bonusschool", "fire"),
        ])
        .unwrap();
        assert!(item.has_bonus_damage());
        let bonus = item.weapon.unwrap().bonus.unwrap();
        assert_eq!(bonus.school, Some(School::Fire));

        let err = value_error(finalize_with(&[
            ("dmg", "44-88"),
            ("speed", "2.60"),
            ("dps", "25.4"),
            ("bonuslowdamage", "5"),
        ]));
        assert_eq!(err, ValueError::IncompleteBonusDamage);
    }

    #[test]
    fn test_grouped_fields_reject_partial_sets() {
        let cases: &[(&[(&str, &str)], ValueError)] = &[
            (&[("create", "Elixir")], ValueError::IncompleteRecipe),
            (&[("createq", "common"), ("reagents", "Herb")], ValueError::IncompleteRecipe),
            (&[("socket", "red")], ValueError::IncompleteSocket),
            (&[("sockbonus", "+4 Stamina")], ValueError::IncompleteSocket),
            (&[("faction", "The Aldor")], ValueError::IncompleteReputation),
            (&[("reprating", "exalted")], ValueError::IncompleteReputation),
            (&[("skill", "blacksmithing")], ValueError::IncompleteProfession),
            (&[("skillrating", "400")], ValueError::IncompleteProfession),
            (&[("bagtype", "herbalism")], ValueError::BagTypeWithoutSlots),
            (&[("set", "Netherwind Regalia")], ValueError::SetWithoutPieces),
        ];
        for (args, expected) in cases {
            assert_eq!(&value_error(finalize_with(args)), expected, "args: {args:?}");
        }
    }

    #[test]
    fn test_grouped_fields_accept_full_sets() {
        let item = finalize_with(&[
            ("create", "Elixir of Giants"),
            ("createq", "common"),
            ("reagents", "Reagent A"),
            ("socket", "red meta"),
            ("sockbonus", "+4 Stamina"),
            ("faction", "the aldor"),
            ("reprating", "honored"),
            ("skill", "alchemy"),
            ("skillrating", "250"),
            ("bag", "24"),
            ("bagtype", "herb"),
            ("set", "Netherwind Regalia"),
            ("setpieces", "8"),
        ])
        .unwrap();
        assert!(item.is_recipe());
        assert!(item.is_socketed());
        assert!(item.requires_reputation());
        assert!(item.requires_profession());
        assert!(item.is_set_piece());
        assert_eq!(
            item.sockets.unwrap().colors,
            vec![SocketColor::Red, SocketColor::Meta]
        );
        assert_eq!(item.bag.unwrap().kind, Some(BagType::Herbalism));
        assert_eq!(item.set.unwrap().page, "Netherwind Regalia");
    }

    #[test]
    fn test_default_collapsing() {
        let item = finalize_with(&[("level", "1"), ("charges", "1"), ("unique", "1")]).unwrap();
        assert_eq!(item.level, None);
        assert_eq!(item.charges, None);
        assert_eq!(item.uniqueness, Some(Uniqueness::Unique));

        let item = finalize_with(&[("level", "80"), ("charges", "3"), ("ueq", "1")]).unwrap();
        assert_eq!(item.level.unwrap().as_str(), "80");
        assert_eq!(item.charges.unwrap().as_str(), "3");
        assert_eq!(item.uniqueness, Some(Uniqueness::Equipped));

        let item = finalize_with(&[("unique", "20")]).unwrap();
        assert_eq!(
            item.uniqueness,
            Some(Uniqueness::Limited(Number::parse("20").unwrap()))
        );
    }

    #[test]
    fn test_lock_states_are_exclusive() {
        let item = finalize_with(&[("locked", "yes"), ("lockpicking", "175")]).unwrap();
        assert_eq!(item.lock, Some(LockState::Locked));

        let item = finalize_with(&[("lockpicking", "175")]).unwrap();
        assert_eq!(
            item.lock,
            Some(LockState::Lockpicking(Number::parse("175").unwrap()))
        );
    }

    #[test]
    fn test_single_residue_line_becomes_location_bind() {
        let mut record = base();
        record.undef.push(Residue::Line {
            text: "Naxxramas".into(),
        });
        let item = finalize(record, &FinalizeOptions::default()).unwrap();
        assert_eq!(item.locationbind.as_deref(), Some("Naxxramas"));
        assert!(item.undef.is_empty());
    }

    #[test]
    fn test_residue_fallback_skips_arguments_and_multiples() {
        let item = finalize_with(&[("colour", "red")]).unwrap();
        assert_eq!(item.locationbind, None);
        assert_eq!(item.undef.len(), 1);

        let mut record = base();
        record.undef.push(Residue::Line { text: "one".into() });
        record.undef.push(Residue::Line { text: "two".into() });
        let item = finalize(record, &FinalizeOptions::default()).unwrap();
        assert_eq!(item.locationbind, None);
        assert_eq!(item.undef.len(), 2);
    }

    #[test]
    fn test_class_order_is_input_independent() {
        let a = finalize_with(&[("classes", "warrior priest mage")]).unwrap();
        let b = finalize_with(&[("classes", "mage warrior priest")]).unwrap();
        assert_eq!(a.classes, b.classes);
        assert_eq!(
            a.classes.iter().copied().collect::<Vec<_>>(),
            vec![PlayerClass::Warrior, PlayerClass::Priest, PlayerClass::Mage]
        );
    }
}
