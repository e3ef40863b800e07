//! Grade-range invariants.

use roster_model::{EntitySchema, RawRow, ValidationError};
use roster_normalization::{format_number, parse_numeric};

const MIN_SCORE: &str = "Min Score";
const MAX_SCORE: &str = "Max Score";

/// Score bounds of an admitted grade-range row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRange {
    pub row: usize,
    pub min: f64,
    pub max: f64,
}

/// Parsed `(min, max)` scores of a row, when both are present and numeric.
pub fn scores(row: &RawRow, schema: &EntitySchema) -> Option<(f64, f64)> {
    let min = schema.column(MIN_SCORE).and_then(|c| row.value_for(c))?;
    let max = schema.column(MAX_SCORE).and_then(|c| row.value_for(c))?;
    Some((parse_numeric(min)?, parse_numeric(max)?))
}

/// `min < max` for a row whose scores are otherwise valid.
pub fn check_order(row: usize, min: f64, max: f64) -> Option<ValidationError> {
    (min >= max).then(|| {
        ValidationError::new(row, MIN_SCORE, "Min Score must be less than Max Score").with_value(
            format!("{}-{}", format_number(min), format_number(max)),
        )
    })
}

/// Overlaps between admitted ranges.
///
/// Ranges are sorted by `min` (source order breaks ties) and each adjacent
/// pair with `previous.max > next.min` is reported once, at the row of the
/// later range, naming the earlier row in `related_row`.
pub fn check_overlaps(ranges: &[ScoredRange]) -> Vec<ValidationError> {
    let mut sorted: Vec<&ScoredRange> = ranges.iter().collect();
    sorted.sort_by(|a, b| a.min.total_cmp(&b.min));

    sorted
        .windows(2)
        .filter(|pair| pair[0].max > pair[1].min)
        .map(|pair| {
            let (lower, upper) = (pair[0], pair[1]);
            ValidationError::new(
                upper.row,
                MIN_SCORE,
                format!(
                    "Score range {}-{} overlaps range {}-{} on row {}",
                    format_number(upper.min),
                    format_number(upper.max),
                    format_number(lower.min),
                    format_number(lower.max),
                    lower.row
                ),
            )
            .with_value(format_number(upper.min))
            .with_related_row(lower.row)
        })
        .collect()
}
