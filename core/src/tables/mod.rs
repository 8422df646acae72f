//! Lookup tables for loosely-typed tooltip vocabulary.
//!
//! Every table maps free-form aliases (case-insensitive, frequently just a
//! two or three letter fragment) onto one canonical enum. Tables that the
//! game exposes as numeric identifiers also accept those identifiers when
//! they fall inside the table's range.
//!
//! Lookups never fail loudly: an unrecognized input yields `None` and the
//! caller decides whether that is an error.
//!
//! Substring tables are **ordered** and first-match-wins. The order is part
//! of the contract (existing content depends on it), including the known
//! overlaps such as `"worgen"` resolving to [`Race::Orc`] because the `or`
//! fragment is checked before `wo`.

mod character;
mod equipment;
mod magic;
mod quality;
mod requirement;

pub use character::{PlayerClass, Race};
pub use equipment::{BagType, BindType, GlyphType, ItemType, Slot, SocketColor};
pub use magic::School;
pub use quality::Quality;
pub use requirement::{Holiday, Profession, Specialization, Standing};

/// Parses `input` as a whole-number code, tolerating surrounding whitespace.
pub(crate) fn numeric_code(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok()
}

/// Returns the value of the first entry whose fragments occur in `input`.
///
/// `input` is lower-cased once; fragments are expected to be lower-case.
pub(crate) fn first_fragment_match<T: Copy>(input: &str, table: &[(&[&str], T)]) -> Option<T> {
    let lowered = input.to_lowercase();
    table
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| lowered.contains(f)))
        .map(|(_, value)| *value)
}

/// Returns the value of the entry that lists `input` exactly (case-insensitive).
pub(crate) fn exact_alias_match<T: Copy>(input: &str, table: &[(&[&str], T)]) -> Option<T> {
    let lowered = input.trim().to_lowercase();
    table
        .iter()
        .find(|(aliases, _)| aliases.contains(&lowered.as_str()))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[(&[&str], u8)] = &[(&["ab", "cd"], 1), (&["b"], 2)];

    #[test]
    fn test_first_fragment_match_prefers_earlier_entries() {
        assert_eq!(first_fragment_match("xABx", SAMPLE), Some(1));
        assert_eq!(first_fragment_match("b", SAMPLE), Some(2));
        assert_eq!(first_fragment_match("zzz", SAMPLE), None);
    }

    #[test]
    fn test_exact_alias_match_is_case_insensitive() {
        assert_eq!(exact_alias_match(" CD ", SAMPLE), Some(1));
        assert_eq!(exact_alias_match("abc", SAMPLE), None);
    }

    #[test]
    fn test_numeric_code() {
        assert_eq!(numeric_code(" 7 "), Some(7));
        assert_eq!(numeric_code("-17"), Some(-17));
        assert_eq!(numeric_code("seven"), None);
    }
}
