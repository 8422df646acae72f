//! Small text helpers shared by the classifier and the override merger.

/// Escapes `&`, `<`, `>` and `"` for safe embedding in wiki markup.
///
/// Single quotes are left alone.
///
/// # Examples
///
/// ```
/// use item_tooltip_core::escape_html;
///
/// assert_eq!(escape_html(r#""A & B" <c>"#), "&quot;A &amp; B&quot; &lt;c&gt;");
/// assert_eq!(escape_html("Hallow's End"), "Hallow's End");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Upper-cases the first character.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases everything, then upper-cases the first letter of each
/// space-separated word.
pub fn title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a decimal without trailing zeros (`72.80` becomes `72.8`).
pub fn format_decimal(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_specials() {
        assert_eq!(escape_html("a<b>c&d\"e"), "a&lt;b&gt;c&amp;d&quot;e");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("inv_sword_01"), "Inv_sword_01");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("the ALDOR"), "The Aldor");
        assert_eq!(title_case("cenarion  circle"), "Cenarion  Circle");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(72.80000000000001), "72.8");
        assert_eq!(format_decimal(14.0), "14");
        assert_eq!(format_decimal(0.126), "0.13");
    }
}
