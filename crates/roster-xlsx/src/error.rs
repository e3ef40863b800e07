//! Error types for workbook operations.

use thiserror::Error;

/// Errors that can occur when reading or writing a workbook.
#[derive(Debug, Error)]
pub enum XlsxError {
    /// The bytes are not a ZIP container.
    #[error("not a workbook: {message}")]
    NotAWorkbook { message: String },

    /// A required package part is absent.
    #[error("missing workbook part: {part}")]
    MissingPart { part: String },

    /// A package part is not well-formed XML.
    #[error("malformed XML in {part}: {message}")]
    MalformedXml { part: String, message: String },

    /// The workbook declares no worksheets.
    #[error("workbook contains no sheets")]
    NoSheets,

    /// A cell reference such as `A1` could not be parsed.
    #[error("invalid cell reference: {reference}")]
    InvalidCellReference { reference: String },

    /// A shared-string cell points past the end of the string table.
    #[error("shared string index {index} out of range ({len} strings)")]
    SharedStringIndex { index: usize, len: usize },

    /// ZIP archive error while writing.
    #[error("archive error: {message}")]
    Archive { message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for workbook operations.
pub type Result<T> = std::result::Result<T, XlsxError>;

impl XlsxError {
    /// Create a NotAWorkbook error.
    pub fn not_a_workbook(message: impl Into<String>) -> Self {
        Self::NotAWorkbook {
            message: message.into(),
        }
    }

    /// Create a MissingPart error.
    pub fn missing_part(part: impl Into<String>) -> Self {
        Self::MissingPart { part: part.into() }
    }

    /// Create a MalformedXml error.
    pub fn malformed_xml(part: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::MalformedXml {
            part: part.into(),
            message: message.to_string(),
        }
    }

    /// Create an InvalidCellReference error.
    pub fn invalid_cell_reference(reference: impl Into<String>) -> Self {
        Self::InvalidCellReference {
            reference: reference.into(),
        }
    }
}

impl From<zip::result::ZipError> for XlsxError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::Archive {
                message: other.to_string(),
            },
        }
    }
}
