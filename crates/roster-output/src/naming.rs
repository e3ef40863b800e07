//! Export file naming and writing.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use roster_model::EntityKind;
use roster_normalization::format_iso_date;
use tracing::info;

use crate::error::{OutputError, Result};

/// A named workbook ready to hand to a save collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Write into `dir`, creating it if needed. Returns the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|source| OutputError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = self.bytes.len(), "wrote workbook");
        Ok(path)
    }
}

/// `<entitytype>_<YYYY-MM-DD>.xlsx`
pub fn export_file_name(kind: EntityKind, date: NaiveDate) -> String {
    format!("{}_{}.xlsx", kind.as_str(), format_iso_date(date))
}

/// `<entitytype>_import_template.xlsx`
pub fn template_file_name(kind: EntityKind) -> String {
    format!("{}_import_template.xlsx", kind.as_str())
}
