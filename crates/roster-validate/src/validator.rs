//! Row validation driver.

use roster_model::{EntityKind, EntitySchema, RawRow, ValidationError};
use tracing::debug;

use crate::checks::{field, grading};
use crate::options::ValidationOptions;

/// Diagnostics and admission decisions for one batch of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    /// Every problem found, per row in scan order, followed by cross-row problems.
    pub errors: Vec<ValidationError>,
    /// Indices into the input slice of rows whose required fields all passed.
    pub accepted: Vec<usize>,
    /// Number of input rows.
    pub total: usize,
}

impl Validation {
    pub fn is_accepted(&self, index: usize) -> bool {
        self.accepted.binary_search(&index).is_ok()
    }
}

/// Validate rows against a schema.
///
/// Columns are checked in schema order and every check runs, so one call
/// surfaces all diagnostics. A row is accepted when none of its required
/// columns failed; optional-column errors are reported without rejecting it.
pub fn validate_rows(
    schema: &EntitySchema,
    rows: &[RawRow],
    options: &ValidationOptions,
) -> Validation {
    let mut errors = Vec::new();
    let mut accepted = Vec::new();
    let mut ranges = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let mut blocked = false;
        for column in schema.columns {
            if let Some(error) = field::check(row, column, options) {
                blocked |= column.required;
                errors.push(error);
            }
        }

        if schema.kind == EntityKind::GradingSystem
            && !blocked
            && let Some((min, max)) = grading::scores(row, schema)
        {
            match grading::check_order(row.row, min, max) {
                Some(error) => {
                    blocked = true;
                    errors.push(error);
                }
                None => ranges.push(grading::ScoredRange {
                    row: row.row,
                    min,
                    max,
                }),
            }
        }

        if !blocked {
            accepted.push(index);
        }
    }

    if schema.kind == EntityKind::GradingSystem {
        errors.extend(grading::check_overlaps(&ranges));
    }

    debug!(
        entity = %schema.kind,
        total = rows.len(),
        accepted = accepted.len(),
        errors = errors.len(),
        "validated rows"
    );

    Validation {
        errors,
        accepted,
        total: rows.len(),
    }
}
