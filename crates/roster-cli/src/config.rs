//! Settings file for the `roster` tool.
//!
//! ```toml
//! [import]
//! gender_policy = "lenient"
//!
//! [export]
//! output_dir = "exports"
//! ```
//!
//! Every key is optional; command-line flags win over file values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roster_core::{GenderPolicy, ImportOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default settings file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "roster.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub import: ImportSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub gender_policy: GenderPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory for exports and templates; the working directory when unset.
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse settings")
    }

    /// Load settings.
    ///
    /// An explicit `path` must exist. Without one, `roster.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("read settings {}", path.display()))?;
                Self::from_toml(&content)
                    .with_context(|| format!("load settings {}", path.display()))
            }
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.is_file() {
                    Self::load(Some(default_path))
                } else {
                    debug!("no settings file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Import options with the flag override applied.
    pub fn import_options(&self, lenient_gender: bool) -> ImportOptions {
        let policy = if lenient_gender {
            GenderPolicy::Lenient
        } else {
            self.import.gender_policy
        };
        ImportOptions::default().with_gender_policy(policy)
    }

    /// Output directory with the flag override applied.
    pub fn output_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.export.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_flag_overrides_file() {
        let settings = Settings::from_toml(
            "[import]\ngender_policy = \"strict\"\n[export]\noutput_dir = \"out\"\n",
        )
        .unwrap();
        assert_eq!(
            settings.import_options(true).gender_policy,
            GenderPolicy::Lenient
        );
        assert_eq!(
            settings.output_dir(Some(Path::new("elsewhere"))),
            PathBuf::from("elsewhere")
        );
        assert_eq!(settings.output_dir(None), PathBuf::from("out"));
    }
}
