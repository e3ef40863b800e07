//! Error types for record building.

use roster_model::ValidationError;
use thiserror::Error;

/// A required value could not be turned into a typed field.
///
/// Rows reaching the builder have already passed validation, so these only
/// surface when the builder is called on rows that were not validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("row {row}: {field} is required")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: invalid {field} value '{value}'")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Result type alias for record building.
pub type Result<T> = std::result::Result<T, TransformError>;

impl TransformError {
    /// Express the failure as a row diagnostic.
    pub fn to_validation_error(&self) -> ValidationError {
        match self {
            Self::MissingField { row, field } => ValidationError::required(*row, field),
            Self::InvalidValue { row, field, value } => {
                ValidationError::new(*row, *field, format!("{field} has an invalid value"))
                    .with_value(value.clone())
            }
        }
    }
}
