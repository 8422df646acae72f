//! Free-text tooltip parsing and wiki rendering for game items.
//!
//! Takes a tooltip body copied from the game plus explicit `key=value`
//! arguments and produces either a wiki tooltip or an error message in wiki
//! markup. The pipeline is:
//!
//! 1. [`parser::TooltipParser`] classifies the body into an
//!    [`AttributeRecord`].
//! 2. [`apply_overrides`] merges the arguments over it.
//! 3. [`finalize`] validates and normalizes it into an [`Item`].
//! 4. [`render_tooltip`] (and [`metadata_line`] on the item's own page)
//!    produces the markup.
//!
//! # Main entry points
//!
//! - [`parse_item`] runs steps 1 to 3 with the default configuration.
//! - [`parse_item_with_report`] also returns a [`ParseReport`] with rule
//!   hits and coverage.
//! - [`render_page`] runs the whole pipeline and always returns markup.
//!
//! # Example
//!
//! ```
//! use item_tooltip_parser::{TooltipConfig, parse_item, render_page};
//!
//! let body = "\
//! Corrupted Ashbringer
//! Binds when picked up
//! +100 Strength
//! ";
//! let args = [("id", "50783"), ("ilvl", "284"), ("q", "legendary")];
//!
//! let item = parse_item(body, args).unwrap();
//! assert_eq!(item.name, "Corrupted Ashbringer");
//! assert_eq!(item.stats.len(), 1);
//!
//! let markup = render_page(body, args, Some("Elsewhere"), &TooltipConfig::default());
//! assert!(markup.starts_with("<div style=\"font-size:0.8em;width:18em\""));
//! ```

pub mod config;
pub mod metadata;
pub mod output;
pub mod parser;
pub mod render;
pub mod report;
pub mod source;

use item_tooltip_core::{AttributeRecord, Item, Result, apply_overrides, finalize};
use tracing::debug;

pub use config::{ConfigError, ConfigResult, TooltipConfig};
pub use metadata::metadata_line;
pub use output::{OutputFormat, format_error, format_item, format_report};
pub use parser::{ParseDiagnostics, RuleHit, TooltipParser};
pub use render::{LineStyle, RenderContext, TooltipLine, render_lines, render_tooltip};
pub use report::{FailureCode, ParseReport, ParseReportBundle};
pub use source::ItemSource;

/// Result of [`parse_item_with_report`].
#[derive(Debug, Clone)]
pub struct ParseRun {
    pub result: Result<Item>,
    pub report: ParseReport,
}

/// Classifies a tooltip body without applying overrides or validation.
///
/// # Examples
///
/// ```
/// use item_tooltip_parser::classify_body;
///
/// let record = classify_body("Hearthstone\nUse: Returns you to your home.").unwrap();
/// assert_eq!(record.name.as_deref(), Some("Hearthstone"));
/// assert_eq!(record.use_effects, vec!["Returns you to your home."]);
/// ```
pub fn classify_body(body: &str) -> Result<AttributeRecord> {
    TooltipParser::new(body).parse()
}

/// Parses `body`, applies `args` and validates the result.
pub fn parse_item<I, K, V>(body: &str, args: I) -> Result<Item>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    parse_item_with_config(body, args, &TooltipConfig::default())
}

/// Like [`parse_item`], with configurable defaults.
///
/// # Errors
///
/// Returns the first parse error from the body, then the first invalid
/// override, then the first failed cross-field check.
pub fn parse_item_with_config<I, K, V>(body: &str, args: I, config: &TooltipConfig) -> Result<Item>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut record = classify_body(body)?;
    apply_overrides(&mut record, args)?;
    finalize(record, &config.finalize_options())
}

/// Parses an item and reports how the body was classified.
///
/// The report is filled even when parsing fails; rule hits then cover the
/// lines classified before the failure.
///
/// # Examples
///
/// ```
/// use item_tooltip_parser::{TooltipConfig, parse_item_with_report};
///
/// let body = "Worn Dagger\n30 Armor\nSomething odd";
/// let run = parse_item_with_report(body, [("id", "1"), ("ilvl", "2")], &TooltipConfig::default());
///
/// assert!(run.result.is_ok());
/// assert_eq!(run.report.recognized_lines, 1);
/// assert_eq!(run.report.relevant_lines, 2);
/// ```
pub fn parse_item_with_report<I, K, V>(body: &str, args: I, config: &TooltipConfig) -> ParseRun
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut parser = TooltipParser::new(body);
    let classified = parser.parse();
    let diagnostics = parser.diagnostics().clone();

    let mut report = ParseReport {
        item: None,
        success: false,
        failure_code: None,
        failure_detail: None,
        rule_hits: diagnostics.rule_hits.clone(),
        coverage: diagnostics.coverage(),
        relevant_lines: diagnostics.relevant_lines,
        recognized_lines: diagnostics.recognized_lines,
        unresolved_lines: diagnostics.unresolved_lines,
        residue: Vec::new(),
    };

    let result = classified.and_then(|mut record| {
        apply_overrides(&mut record, args)?;
        report.item = record.name.clone();
        report.residue = record.undef.clone();
        finalize(record, &config.finalize_options())
    });

    match &result {
        Ok(item) => {
            report.success = true;
            // Finalize may have moved a single residue line into the zone bind.
            report.residue = item.undef.clone();
        }
        Err(err) => {
            debug!(error = %err, "Item parse failed");
            report.fail(err);
        }
    }

    ParseRun { result, report }
}

/// Runs the whole pipeline for one page and returns wiki markup.
///
/// `page` is the title of the page the tooltip is rendered on; when it
/// equals the item page the metadata line is included. Failures render as
/// error markup linking to the configured help page.
pub fn render_page<I, K, V>(body: &str, args: I, page: Option<&str>, config: &TooltipConfig) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    match parse_item_with_config(body, args, config) {
        Ok(item) => {
            let ctx = RenderContext::for_page(&item, page, config);
            render_tooltip(&item, &ctx)
        }
        Err(err) => err.to_markup(&config.help_page),
    }
}
