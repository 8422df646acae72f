//! Tooltip error types.
//!
//! Every failure is terminal: no partial item is produced. Parse errors
//! describe tooltip text no rule can make sense of and carry a literal
//! example of accepted input. Value errors name a field, or a group of
//! fields that must be supplied together.
//!
//! Both kinds render to wiki markup with [`TooltipError::to_markup`] so the
//! calling page can show them in place of the tooltip.

use thiserror::Error;

/// Errors raised while building an item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TooltipError {
    /// The tooltip body is malformed in a way no heuristic can repair.
    #[error("Tooltip parse error: {message} (e.g. {example})")]
    Parse { message: String, example: String },

    /// A field value or field combination is invalid.
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Field-level and cross-field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A single field received a value it cannot accept.
    #[error("Tooltip error: \"{field}\" is not {expected}. \"{value}\" was provided.")]
    InvalidField {
        field: String,
        expected: String,
        value: String,
    },
    /// `name`, `id` or `ilvl` is absent, or `id`/`ilvl` is not numeric.
    #[error("Tooltip error: All items must have name, ID and iLvl defined!")]
    MissingMandatory,
    /// Only part of the damage/speed/dps group was supplied.
    #[error(
        "Tooltip error: Weapons must have low-end damage, high-end damage, attack speed and damage per second defined together!"
    )]
    IncompleteWeapon,
    /// Bonus damage was supplied on an item without a complete weapon block.
    #[error("Tooltip error: Bonus damage can only be defined on a weapon!")]
    BonusDamageWithoutWeapon,
    /// Only one end of the bonus damage range is numeric.
    #[error(
        "Tooltip error: Bonus low-end damage and bonus high-end damage must be defined together!"
    )]
    IncompleteBonusDamage,
    #[error("Tooltip error: Recipes must have \"create\", \"createq\" and \"reagents\" defined!")]
    IncompleteRecipe,
    #[error("Tooltip error: Socketed items must have a socket bonus!")]
    IncompleteSocket,
    #[error("Tooltip error: Reputation requirements must list the required reputation rating!")]
    IncompleteReputation,
    #[error("Tooltip error: Profession requirements must list the required profession skill!")]
    IncompleteProfession,
    #[error("Tooltip error: A bagtype was specified, but not the size of the bag?")]
    BagTypeWithoutSlots,
    #[error("Tooltip error: Please define the size of the item set with setpieces=x")]
    SetWithoutPieces,
}

impl ValueError {
    /// Shorthand for [`ValueError::InvalidField`].
    pub fn invalid(field: &str, expected: &str, value: &str) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }

    /// Message text without the `Tooltip error: ` marker.
    fn message(&self) -> String {
        let full = self.to_string();
        full.strip_prefix("Tooltip error: ")
            .map(str::to_string)
            .unwrap_or(full)
    }
}

impl TooltipError {
    pub fn parse(message: impl Into<String>, example: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            example: example.into(),
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Renders the error as wiki markup linking to `help_page`.
    ///
    /// # Examples
    ///
    /// ```
    /// use item_tooltip_core::{TooltipError, ValueError};
    ///
    /// let err = TooltipError::from(ValueError::invalid("armor", "numeric", "lots"));
    /// assert_eq!(
    ///     err.to_markup("Help:Items"),
    ///     ";<span class=\"error\">Tooltip error</span>\n\
    ///      : \"armor\" is not numeric. \"lots\" was provided.\n\
    ///      : See [[Help:Items]] for more information."
    /// );
    /// ```
    pub fn to_markup(&self, help_page: &str) -> String {
        match self {
            Self::Parse { message, example } => format!(
                ";<span class=\"error\">Tooltip parse error</span>\n\
                 : {message}\n <code><nowiki>{example}</nowiki></code>\n\
                 : See [[{help_page}]] for more information"
            ),
            Self::Value(ValueError::InvalidField {
                field,
                expected,
                value,
            }) => format!(
                ";<span class=\"error\">Tooltip error</span>\n\
                 : \"{field}\" is not {expected}. \"{value}\" was provided.\n\
                 : See [[{help_page}]] for more information."
            ),
            Self::Value(other) => format!(
                "Tooltip error: <span class=\"error\">{}</span>",
                other.message()
            ),
        }
    }
}

/// Convenience alias for results with [`TooltipError`].
pub type Result<T> = std::result::Result<T, TooltipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_markers() {
        let parse = TooltipError::parse("Glyphs are either \"Major Glyph\" or \"Minor Glyph\"", "Major Glyph");
        assert!(parse.to_string().starts_with("Tooltip parse error"));
        assert!(parse.is_parse_error());

        let value = TooltipError::from(ValueError::MissingMandatory);
        assert!(value.to_string().starts_with("Tooltip error"));
        assert!(!value.is_parse_error());
    }

    #[test]
    fn test_parse_error_markup_embeds_example() {
        let err = TooltipError::parse(
            "Please define the size of the equipment set on the same line",
            "Netherwind Regalia (0/8)",
        );
        let markup = err.to_markup("Help:Items");
        assert!(markup.starts_with(";<span class=\"error\">Tooltip parse error</span>\n"));
        assert!(markup.contains(" <code><nowiki>Netherwind Regalia (0/8)</nowiki></code>\n"));
        assert!(markup.ends_with(": See [[Help:Items]] for more information"));
    }

    #[test]
    fn test_invariant_markup() {
        let err = TooltipError::from(ValueError::BagTypeWithoutSlots);
        assert_eq!(
            err.to_markup("Help:Items"),
            "Tooltip error: <span class=\"error\">A bagtype was specified, but not the size of the bag?</span>"
        );
    }

    #[test]
    fn test_custom_help_page() {
        let err = TooltipError::from(ValueError::invalid("race", "one of the playable races", "Murloc"));
        assert!(err.to_markup("Project:Item help").contains("[[Project:Item help]]"));
    }
}
