//! Unified error type for import and export calls.
//!
//! Only structural failures end up here. Row-level data problems are
//! reported through [`roster_model::ValidationResult`] instead.

use roster_ingest::IngestError;
use roster_model::{ConfigurationError, EntityKind, ModelError};
use roster_output::OutputError;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    // =========================================================================
    // REQUEST ERRORS
    // =========================================================================
    /// Unknown entity type requested.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Operation needs a different entity kind.
    #[error("expected {expected} records, got {found}")]
    WrongEntity {
        expected: EntityKind,
        found: EntityKind,
    },

    // =========================================================================
    // STAGE ERRORS
    // =========================================================================
    /// Input bytes are not a readable workbook.
    #[error(transparent)]
    Parse(#[from] IngestError),

    /// Export or template serialization failed.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// Imported records do not form a valid aggregate.
    #[error(transparent)]
    Model(#[from] ModelError),

    // =========================================================================
    // SINK ERRORS
    // =========================================================================
    /// Records could not be serialized for hand-off.
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while handing off records.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
