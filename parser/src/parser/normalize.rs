//! Tooltip-body normalization.

use item_tooltip_core::escape_html;

use super::IndexedLine;

/// Escapes the body once, then splits it into trimmed, non-blank lines.
///
/// Line indices refer to the raw body, so blank lines still count.
pub fn normalize_body(raw: &str) -> Vec<IndexedLine> {
    let escaped = escape_html(raw);
    let unified = escaped.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| IndexedLine {
                index,
                text: trimmed.to_string(),
            })
        })
        .collect()
}
