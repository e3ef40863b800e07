use std::path::PathBuf;

use roster_model::{EntityKind, ValidationResult};

/// What one `roster import` run produced.
#[derive(Debug)]
pub struct ImportReport {
    pub kind: EntityKind,
    pub source: PathBuf,
    pub result: ValidationResult,
    pub json_output: Option<PathBuf>,
    pub grading_system: Option<GradingSystemSummary>,
}

#[derive(Debug)]
pub struct GradingSystemSummary {
    pub name: String,
    pub bands: usize,
}

impl ImportReport {
    pub fn has_errors(&self) -> bool {
        !self.result.valid
    }
}
