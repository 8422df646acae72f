//! Output formatting for items and reports.

use item_tooltip_core::Item;

use crate::config::TooltipConfig;
use crate::render::{RenderContext, render_lines, render_tooltip};
use crate::report::ParseReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    /// Wiki markup as it would appear on the page.
    Markup,
    Table,
}

/// Formats a finalized item.
///
/// `Markup` renders the full tooltip for the given context; `Table` lists
/// the tooltip lines with their CSS class.
pub fn format_item(
    item: &Item,
    format: OutputFormat,
    ctx: &RenderContext<'_>,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(item)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(item).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markup => Ok(render_tooltip(item, ctx)),
        OutputFormat::Table => Ok(item_to_table(item, ctx)),
    }
}

/// Formats a parse report.
pub fn format_report(report: &ParseReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markup => Ok(report_to_markup(report)),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

/// Formats a failure the way the wiki shows it in place of a tooltip.
pub fn format_error(
    err: &item_tooltip_core::TooltipError,
    format: OutputFormat,
    config: &TooltipConfig,
) -> String {
    match format {
        OutputFormat::Markup => err.to_markup(&config.help_page),
        _ => err.to_string(),
    }
}

fn item_to_table(item: &Item, ctx: &RenderContext<'_>) -> String {
    let lines = render_lines(item, ctx);
    let width = lines.iter().map(|line| line.class.len()).max().unwrap_or(4);

    let mut out = format!(
        "Item: {}  ID: {}  iLvl: {}  Quality: {}\n",
        item.name,
        item.id,
        item.ilvl,
        item.quality.name()
    );
    for line in &lines {
        out.push_str(&format!("  {:<width$}  {}\n", line.class, line.text));
    }
    if !item.undef.is_empty() {
        out.push_str("\nUnplaced:\n");
        for residue in &item.undef {
            out.push_str(&format!("  {residue}\n"));
        }
    }
    out
}

fn report_to_markup(report: &ParseReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "== Parse report: {} ==\n",
        report.item.as_deref().unwrap_or("(unnamed)")
    ));
    out.push_str(&format!(
        "* Success: {}\n",
        if report.success { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "* Coverage: {:.2} ({}/{} lines)\n",
        report.coverage, report.recognized_lines, report.relevant_lines
    ));
    if let Some(ref code) = report.failure_code {
        out.push_str(&format!("* Failure code: {code}\n"));
    }
    if let Some(ref detail) = report.failure_detail {
        out.push_str(&format!("* Failure detail: <nowiki>{detail}</nowiki>\n"));
    }

    if !report.unresolved_lines.is_empty() {
        out.push_str("\n=== Unresolved lines ===\n");
        for line in &report.unresolved_lines {
            out.push_str(&format!("* <nowiki>{line}</nowiki>\n"));
        }
    }

    out
}

fn report_to_table(report: &ParseReport) -> String {
    let status = if report.success { "OK" } else { "FAIL" };
    let mut out = format!(
        "{:<32} {:<6} cov={:.2} lines={}/{}",
        report.item.as_deref().unwrap_or("?"),
        status,
        report.coverage,
        report.recognized_lines,
        report.relevant_lines,
    );
    if let Some(ref code) = report.failure_code {
        out.push_str(&format!("  [{code}]"));
    }
    out.push('\n');
    out
}
