//! Free-text tooltip classifier.
//!
//! A tooltip body is a near-verbatim copy of an in-game tooltip. It has no
//! grammar worth the name, so this module does not try to tokenize it.
//! Instead every line after the item name is run through an ordered table of
//! heuristics ([`RULES`]); the first rule that can read the line claims it.
//!
//! # Architecture
//!
//! 1. The body is HTML-escaped once, split into trimmed lines and blank
//!    lines are dropped.
//! 2. The first line is the item name.
//! 3. A [`LineCursor`] walks the remaining lines. Rules that own a
//!    multi-line block (item sets) advance the cursor themselves.
//! 4. Lines no rule claims become [`Residue::Line`] entries on the record.
//!
//! The primary entry point is [`TooltipParser::new`] followed by
//! [`TooltipParser::parse`]; most consumers should use
//! [`parse_item`](crate::parse_item) instead.

mod cursor;
mod layout;
mod normalize;
mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use item_tooltip_core::{AttributeRecord, Residue, Result};

pub use cursor::LineCursor;
pub use normalize::normalize_body;
pub use rules::{Action, Flag, Handled, Handler, RULES, Rule, Trigger, classify};

/// A normalized body line together with its index in the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedLine {
    pub index: usize,
    pub text: String,
}

/// The rule that claimed a body line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    /// Zero-based line index in the raw body.
    pub line: usize,
    pub rule: String,
}

/// Diagnostics for a single parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    pub rule_hits: Vec<RuleHit>,
    /// Non-blank lines after the name line.
    pub relevant_lines: usize,
    pub recognized_lines: usize,
    pub unresolved_lines: Vec<String>,
}

impl ParseDiagnostics {
    pub fn coverage(&self) -> f64 {
        if self.relevant_lines == 0 {
            return 0.0;
        }
        self.recognized_lines as f64 / self.relevant_lines as f64
    }

    fn record_hit(&mut self, line: &IndexedLine, rule: &str) {
        self.recognized_lines += 1;
        self.rule_hits.push(RuleHit {
            line: line.index,
            rule: rule.to_string(),
        });
    }
}

/// Classifier for one tooltip body.
pub struct TooltipParser {
    raw_body: String,
    diagnostics: ParseDiagnostics,
}

impl TooltipParser {
    pub fn new(body: &str) -> Self {
        Self {
            raw_body: body.to_string(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Classifies the body into a draft record.
    ///
    /// An empty body yields an empty record; a body of one line yields a
    /// record holding only the name.
    ///
    /// # Errors
    ///
    /// Returns a parse error for structurally broken lines (a glyph that is
    /// neither major nor minor, an item-set header without a size, ...) and
    /// a value error for bind types, classes or races no table knows.
    pub fn parse(&mut self) -> Result<AttributeRecord> {
        self.diagnostics = ParseDiagnostics::default();
        let mut record = AttributeRecord::new();
        let mut cursor = LineCursor::new(normalize_body(&self.raw_body));

        let Some(name) = cursor.next() else {
            debug!("Empty tooltip body");
            return Ok(record);
        };
        record.name = Some(name.text);
        self.diagnostics.relevant_lines = cursor.remaining();

        while let Some(line) = cursor.next() {
            let mark = cursor.position();
            match classify(&line.text, &mut cursor, &mut record)? {
                Some(rule) => {
                    self.diagnostics.record_hit(&line, rule);
                    for skipped in cursor.consumed_since(mark) {
                        debug!(rule, line = %skipped.text, "Line consumed by block rule");
                        self.diagnostics.record_hit(skipped, rule);
                    }
                }
                None => {
                    debug!(line = %line.text, "Unrecognized tooltip line");
                    self.diagnostics.unresolved_lines.push(line.text.clone());
                    record.undef.push(Residue::Line { text: line.text });
                }
            }
        }

        Ok(record)
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }
}
