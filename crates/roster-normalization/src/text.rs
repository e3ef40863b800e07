//! Text field normalization.

use roster_model::PassFail;

/// Trim surrounding whitespace.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_string()
}

/// Letter grades are stored upper-case: `b+` becomes `B+`.
pub fn normalize_letter_grade(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// `Pass`/`P` or `Fail`/`F`, any case.
pub fn normalize_pass_fail(raw: &str) -> Option<PassFail> {
    PassFail::parse(raw)
}

/// Split a comma-separated subject list, dropping blanks.
pub fn split_subjects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|subject| !subject.is_empty())
        .map(String::from)
        .collect()
}

/// Inverse of [`split_subjects`].
pub fn join_subjects(subjects: &[String]) -> String {
    subjects.join(", ")
}
