//! Structured parse reporting.

use serde::{Deserialize, Serialize};

use item_tooltip_core::{Residue, TooltipError};

use crate::parser::RuleHit;

/// Why a parse run produced no item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    /// The tooltip body contained a line no heuristic can repair.
    ParseError,
    /// A field value or field group failed validation.
    ValueError,
}

impl std::fmt::Display for FailureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseError => write!(f, "parse_error"),
            Self::ValueError => write!(f, "value_error"),
        }
    }
}

impl From<&TooltipError> for FailureCode {
    fn from(err: &TooltipError) -> Self {
        if err.is_parse_error() {
            Self::ParseError
        } else {
            Self::ValueError
        }
    }
}

/// Per-item parse report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    /// Item name as read from the body or the `name` override.
    pub item: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<FailureCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_detail: Option<String>,
    pub rule_hits: Vec<RuleHit>,
    pub coverage: f64,
    pub relevant_lines: usize,
    pub recognized_lines: usize,
    pub unresolved_lines: Vec<String>,
    /// Body lines and override arguments that ended up unplaced.
    pub residue: Vec<Residue>,
}

impl ParseReport {
    /// Records `err` as the outcome of this run.
    pub fn fail(&mut self, err: &TooltipError) {
        self.success = false;
        self.failure_code = Some(FailureCode::from(err));
        self.failure_detail = Some(err.to_string());
    }
}

/// Reports for a whole batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReportBundle {
    pub version: String,
    pub reports: Vec<ParseReport>,
    /// Sources that could not be read or decoded.
    pub failures: Vec<String>,
}
