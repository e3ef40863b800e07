//! Error types for roster ingestion.

use std::path::PathBuf;

use roster_xlsx::XlsxError;
use thiserror::Error;

/// Errors that can occur while turning an uploaded file into raw rows.
///
/// Every variant is fatal for the whole import: nothing was read.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Bytes are not a readable workbook, or it has no sheets.
    #[error("could not read workbook: {0}")]
    Parse(#[from] XlsxError),

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The fatal "not a readable workbook" condition.
pub type ParseError = IngestError;

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
