//! Gender code normalization.

use roster_model::Gender;

/// Normalize a gender cell to `M` or `F`.
///
/// Matches `M`/`Male` and `F`/`Female` case-insensitively. Anything else
/// falls back to [`Gender::M`]; callers that must not mask bad input check
/// [`is_known_gender`] first.
pub fn normalize_gender(raw: &str) -> Gender {
    Gender::parse(raw).unwrap_or(Gender::M)
}

/// Whether `raw` is one of the recognized gender spellings.
pub fn is_known_gender(raw: &str) -> bool {
    Gender::parse(raw).is_some()
}
