//! Numeric cell parsing.

use std::sync::LazyLock;

use regex::Regex;

static GROUPED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("Invalid digit grouping regex")
});

/// Parse a cell to a finite `f64`.
///
/// Handles common numeric formats:
/// - Standard numbers: "123", "-45.67"
/// - Thousands separators: "1,234", "12,345.5"
/// - Surrounding whitespace: "  123  "
/// - Scientific notation: "1.5e2"
///
/// Commas only count as separators between complete groups of three
/// digits, so "1,2" and "1 2" are rejected. NaN and infinities are rejected.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if GROUPED_REGEX.is_match(trimmed) {
        trimmed.replace(',', "").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };
    parsed.ok().filter(|number| number.is_finite())
}

/// Parse a cell to a whole number; `"12.0"` is accepted, `"12.5"` is not.
pub fn parse_integer(value: &str) -> Option<i64> {
    let number = parse_numeric(value)?;
    if number.fract() != 0.0 || number.abs() > i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

/// Format a number without unnecessary trailing zeros.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{value}");
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }
}
