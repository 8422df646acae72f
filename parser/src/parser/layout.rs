//! Positional readers for the fixed tooltip line layouts.
//!
//! Every reader returns `None` when the line does not have the expected
//! shape, which lets the owning rule decline the line.

use regex::Regex;
use std::sync::LazyLock;

use item_tooltip_core::{School, SellPrice, is_numeric};

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex must compile"));

/// A `<low> - <high> [School] Damage` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DamageLine {
    pub bonus: bool,
    pub low: String,
    pub high: String,
    pub school: Option<School>,
}

/// Reads both damage layouts: `44 - 115 Damage` and `44-115 Frost Damage`.
///
/// A leading `+` marks bonus damage.
pub(crate) fn damage_line(line: &str) -> Option<DamageLine> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;
    let (bonus, first) = match first.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, first),
    };

    let (low, high, school_token) = match first.split_once('-') {
        Some((low, high)) if !low.is_empty() => (low, high, tokens.get(1)),
        _ => {
            if !matches!(tokens.get(1), Some(&"-") | Some(&"–")) {
                return None;
            }
            (first, *tokens.get(2)?, tokens.get(3))
        }
    };

    if !is_numeric(low) || !is_numeric(high) {
        return None;
    }

    Some(DamageLine {
        bonus,
        low: low.to_string(),
        high: high.to_string(),
        school: school_token.and_then(|token| School::lookup(token)),
    })
}

/// Trimmed text after the first occurrence of `marker`.
pub(crate) fn text_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker)
        .map(|at| line[at + marker.len()..].trim())
}

/// Text between the first `(` and the following `)` (or end of line).
pub(crate) fn parenthesized(line: &str) -> Option<&str> {
    let open = line.find('(')?;
    let inner = &line[open + 1..];
    Some(inner.split(')').next().unwrap_or(inner).trim())
}

/// First run of digits anywhere in the line.
pub(crate) fn first_integer(line: &str) -> Option<&str> {
    FIRST_INTEGER.find(line).map(|m| m.as_str())
}

/// `true` for the header line of an item-set block.
pub(crate) fn looks_like_set_header(line: &str) -> bool {
    const NOT_A_SET: [&str; 5] = ["[", "&quot;", "Chance on hit:", "Equip:", "Use:"];
    if NOT_A_SET.iter().any(|prefix| line.starts_with(prefix)) {
        return false;
    }
    line.contains('/') || line.to_lowercase().contains("pieces")
}

/// Reads `Name (x/y)` or `Name (N pieces)` into the set name and its size.
pub(crate) fn set_header(line: &str) -> Option<(String, usize)> {
    let open = line.find('(')?;
    let name = line[..open].trim().to_string();
    let inner = parenthesized(line)?;
    let size_text = match inner.split_once('/') {
        Some((_, total)) => total.trim(),
        None => inner.split_whitespace().next()?,
    };
    let size = size_text.parse().ok()?;
    Some((name, size))
}

/// Reads coin tokens (`1g`, `20s`, `5c`) from the text after `Sell Price`.
///
/// Text without any coin token is kept as free text.
pub(crate) fn sell_price(rest: &str) -> Option<SellPrice> {
    let rest = rest.trim_start_matches(':').trim();
    if rest.is_empty() {
        return None;
    }

    let mut gold = None;
    let mut silver = None;
    let mut copper = None;
    for token in rest.split_whitespace() {
        let Some(unit) = token.chars().last() else {
            continue;
        };
        let amount = &token[..token.len() - unit.len_utf8()];
        if !is_numeric(amount) {
            continue;
        }
        match unit {
            'g' => gold = Some(amount.to_string()),
            's' => silver = Some(amount.to_string()),
            'c' => copper = Some(amount.to_string()),
            _ => {}
        }
    }

    if gold.is_none() && silver.is_none() && copper.is_none() {
        return Some(SellPrice::Text(rest.to_string()));
    }
    Some(SellPrice::Coins {
        gold,
        silver,
        copper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_damage() {
        let dmg = damage_line("44 - 115 Damage").unwrap();
        assert!(!dmg.bonus);
        assert_eq!((dmg.low.as_str(), dmg.high.as_str()), ("44", "115"));
        assert_eq!(dmg.school, None);
    }

    #[test]
    fn test_compact_damage_with_school() {
        let dmg = damage_line("11-44 Frost Damage").unwrap();
        assert_eq!(dmg.low, "11");
        assert_eq!(dmg.high, "44");
        assert_eq!(dmg.school, Some(School::Frost));
    }

    #[test]
    fn test_bonus_damage_both_layouts() {
        let spaced = damage_line("+7 - 13 Shadow Damage").unwrap();
        assert!(spaced.bonus);
        assert_eq!(spaced.low, "7");
        assert_eq!(spaced.school, Some(School::Shadow));

        let compact = damage_line("+7-13 Fire Damage").unwrap();
        assert!(compact.bonus);
        assert_eq!(compact.low, "7");
        assert_eq!(compact.high, "13");
        assert_eq!(compact.school, Some(School::Fire));
    }

    #[test]
    fn test_damage_rejects_prose() {
        assert!(damage_line("Chance on hit: Blasts for 100 Fire Damage").is_none());
        assert!(damage_line("Damage").is_none());
        assert!(damage_line("44 - lots Damage").is_none());
    }

    #[test]
    fn test_parenthesized_and_first_integer() {
        assert_eq!(parenthesized("Requires Lockpicking (300)"), Some("300"));
        assert_eq!(parenthesized("Unique (20"), Some("20"));
        assert_eq!(parenthesized("no parens"), None);
        assert_eq!(first_integer("Equip: Increases your dodge rating by 24."), Some("24"));
        assert_eq!(first_integer("Equip: nothing"), None);
    }

    #[test]
    fn test_set_header_forms() {
        assert_eq!(
            set_header("Netherwind Regalia (0/8)"),
            Some(("Netherwind Regalia".to_string(), 8))
        );
        assert_eq!(
            set_header("Battlegear of Might (8 pieces)"),
            Some(("Battlegear of Might".to_string(), 8))
        );
        assert_eq!(set_header("Tier 10 (3/10)").map(|(_, n)| n), Some(10));
        assert_eq!(set_header("Netherwind Regalia 0/8"), None);
        assert_eq!(set_header("Netherwind Regalia (x/y)"), None);
    }

    #[test]
    fn test_set_header_detection_skips_effect_lines() {
        assert!(looks_like_set_header("Netherwind Regalia (0/8)"));
        assert!(looks_like_set_header("Battlegear (5 Pieces)"));
        assert!(!looks_like_set_header("Use: Restores 1/2 of your mana."));
        assert!(!looks_like_set_header("[Pattern: Cloak/Cape] rare"));
        assert!(!looks_like_set_header("Sell Price: 1g"));
    }

    #[test]
    fn test_sell_price_coins_and_text() {
        assert_eq!(
            sell_price(": 1g 20s 5c"),
            Some(SellPrice::Coins {
                gold: Some("1".into()),
                silver: Some("20".into()),
                copper: Some("5".into()),
            })
        );
        assert_eq!(
            sell_price(": 75c"),
            Some(SellPrice::Coins {
                gold: None,
                silver: None,
                copper: Some("75".into()),
            })
        );
        assert_eq!(
            sell_price(": No sell price"),
            Some(SellPrice::Text("No sell price".into()))
        );
        assert_eq!(sell_price(":"), None);
    }

    #[test]
    fn test_text_after() {
        assert_eq!(text_after("Duration: 7 days", "Duration"), Some(": 7 days"));
        assert_eq!(text_after("Requires Level 70", "Requires Level"), Some("70"));
        assert_eq!(text_after("Speed", "Level"), None);
    }
}
