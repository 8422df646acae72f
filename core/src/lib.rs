//! Item records, lookup tables, override merging and validation.
//!
//! This crate holds everything about a game-item tooltip that does not
//! involve reading free text:
//!
//! - [`AttributeRecord`]: the draft record filled by the line classifier
//!   (in `item-tooltip-parser`) and by explicit overrides.
//! - [`Item`]: the finalized, validated item handed to renderers.
//! - Lookup tables ([`Quality`], [`PlayerClass`], [`Race`], [`Slot`],
//!   [`School`], ...) mapping loose aliases onto canonical values.
//! - [`apply_overrides`]: merges `key=value` arguments into a draft.
//! - [`finalize`]: the cross-field sanity pass producing an [`Item`].
//! - [`TooltipError`]: parse and value errors, renderable as wiki markup.
//!
//! # Example
//!
//! ```
//! use item_tooltip_core::*;
//!
//! let mut record = AttributeRecord::named("Bag");
//! apply_overrides(&mut record, [("id", "6"), ("ilvl", "1"), ("bagtype", "herbalism")]).unwrap();
//!
//! let err = finalize(record, &FinalizeOptions::default()).unwrap_err();
//! assert_eq!(err, TooltipError::Value(ValueError::BagTypeWithoutSlots));
//! assert!(err.to_string().starts_with("Tooltip error"));
//! ```

mod error;
mod merge;
mod tables;
mod text;
mod types;
mod validate;

pub use error::{Result, TooltipError, ValueError};
pub use merge::{OverrideField, apply_overrides};
pub use tables::{
    BagType, BindType, GlyphType, Holiday, ItemType, PlayerClass, Profession, Quality, Race,
    School, Slot, SocketColor, Specialization, Standing,
};
pub use text::{capitalize_first, escape_html, format_decimal, title_case};
pub use types::{
    AttributeRecord, Bag, Damage, Item, LockState, Number, PrimaryStat, ProfessionRequirement,
    Rating, RawRange, Recipe, ReputationRequirement, Residue, SellPrice, SetMembership, Sockets,
    Uniqueness, Weapon, is_numeric,
};
pub use validate::{FERAL_DPS_THRESHOLD, FinalizeOptions, feral_attack_power, finalize};
