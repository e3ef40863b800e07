//! Validation diagnostics.
//!
//! Row-level problems never abort an import; they are collected here and
//! returned alongside whatever records were admitted.

use serde::{Deserialize, Serialize};

/// A single field-level diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based source row number.
    pub row: usize,
    /// Canonical header label of the offending column.
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// Raw cell value when it helps to show it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Second row involved in a cross-row problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_row: Option<usize>,
}

impl ValidationError {
    pub fn new(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
            value: None,
            related_row: None,
        }
    }

    /// Missing required field.
    pub fn required(row: usize, field: &str) -> Self {
        Self::new(row, field, format!("{field} is required"))
    }

    /// Attach the raw value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Attach the other row of a cross-row problem.
    #[must_use]
    pub fn with_related_row(mut self, row: usize) -> Self {
        self.related_row = Some(row);
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)?;
        if let Some(value) = &self.value {
            write!(f, " (got '{value}')")?;
        }
        Ok(())
    }
}

/// Complete diagnostic output of one import call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when `errors` is empty.
    pub valid: bool,
    /// Every diagnostic, in row order then schema order; never truncated.
    pub errors: Vec<ValidationError>,
    /// Number of records produced.
    pub valid_row_count: usize,
    /// Number of data rows supplied (header excluded).
    pub total_row_count: usize,
}

impl ValidationResult {
    pub fn new(errors: Vec<ValidationError>, valid_row_count: usize, total_row_count: usize) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            valid_row_count,
            total_row_count,
        }
    }

    /// Rows that produced no record.
    pub fn rejected_row_count(&self) -> usize {
        self.total_row_count.saturating_sub(self.valid_row_count)
    }

    /// Errors reported against one source row.
    pub fn errors_for_row(&self, row: usize) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |error| error.row == row)
    }

    /// Whether an error exists for the given row and field.
    pub fn has_error(&self, row: usize, field: &str) -> bool {
        self.errors_for_row(row).any(|error| error.field == field)
    }
}
