//! Error types for the roster data model.

use thiserror::Error;

/// A caller asked for something the engine is not configured to handle.
///
/// These are fatal and never retried: the request itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Entity type name does not match any known entity.
    #[error("unknown entity type: {name}")]
    UnknownEntity { name: String },
}

/// Errors raised while constructing model values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Entity lookup failed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Two grade ranges cover the same part of the score axis.
    #[error(
        "grade range {upper_min}-{upper_max} ({upper_letter}) overlaps {lower_min}-{lower_max} ({lower_letter})"
    )]
    OverlappingRanges {
        lower_min: f64,
        lower_max: f64,
        lower_letter: String,
        upper_min: f64,
        upper_max: f64,
        upper_letter: String,
    },

    /// A single grade range has min >= max or lies outside 0-100.
    #[error("invalid grade range {min}-{max}: {reason}")]
    InvalidRange { min: f64, max: f64, reason: String },

    /// Grading system has no name.
    #[error("grading system name must not be empty")]
    EmptyGradingSystemName,
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
