//! Export and template generation.

use roster_model::{DomainRecord, EntityKind, GradingSystem};
use roster_output::{
    ExportFile, export_file_name, template_file_name, write_records, write_template,
};
use tracing::info;

use crate::error::Result;
use crate::options::ExportOptions;

/// Export records of one kind as `<entitytype>_<ISODate>.xlsx`.
pub fn export(
    kind: EntityKind,
    records: &[DomainRecord],
    options: &ExportOptions,
) -> Result<ExportFile> {
    let bytes = write_records(kind, records)?;
    let file = ExportFile::new(export_file_name(kind, options.date()), bytes);
    info!(entity = %kind, records = records.len(), file = %file.file_name, "exported records");
    Ok(file)
}

/// Export the bands of a grading system.
pub fn export_grading_system(system: &GradingSystem, options: &ExportOptions) -> Result<ExportFile> {
    let records: Vec<DomainRecord> = system
        .ranges()
        .iter()
        .cloned()
        .map(DomainRecord::GradeRange)
        .collect();
    export(EntityKind::GradingSystem, &records, options)
}

/// The fixed import template for `kind`.
pub fn template(kind: EntityKind) -> Result<ExportFile> {
    Ok(ExportFile::new(template_file_name(kind), write_template(kind)?))
}
