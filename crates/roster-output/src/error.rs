//! Error types for export output.

use std::path::PathBuf;

use roster_model::EntityKind;
use roster_xlsx::XlsxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// A record of another entity kind was passed to a single-kind export.
    #[error("cannot export {found} record as {expected}")]
    MixedRecords {
        expected: EntityKind,
        found: EntityKind,
    },

    /// Workbook serialization failed.
    #[error("failed to write workbook: {0}")]
    Workbook(#[from] XlsxError),

    /// Failed to create the output directory or write the file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
