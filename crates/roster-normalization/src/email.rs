//! Email syntax check.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, and a domain containing at least one dot; no whitespace.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Whether `raw` looks like an email address.
///
/// This is a syntactic check only and says nothing about deliverability.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw.trim())
}
