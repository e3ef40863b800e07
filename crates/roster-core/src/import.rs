//! Import pipeline: workbook bytes → rows → validation → records.

use roster_ingest::read_table;
use roster_model::{
    DomainRecord, EntityKind, EntitySchema, GradeRange, GradingSystem, RawRow, ValidationResult,
};
use roster_schema::get_schema;
use roster_transform::build_records;
use roster_validate::validate_rows;
use tracing::{debug, info, info_span, warn};

use crate::error::{CoreError, Result};
use crate::options::ImportOptions;

/// Complete result of one import call.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub kind: EntityKind,
    pub result: ValidationResult,
    /// Records built from accepted rows, in source order.
    pub records: Vec<DomainRecord>,
}

impl ImportOutcome {
    /// Assemble imported grade ranges into a named grading system.
    ///
    /// # Errors
    ///
    /// [`CoreError::WrongEntity`] for non-grading imports, and
    /// [`CoreError::Model`] when the ranges overlap or the name is blank.
    pub fn into_grading_system(self, name: &str) -> Result<GradingSystem> {
        if self.kind != EntityKind::GradingSystem {
            return Err(CoreError::WrongEntity {
                expected: EntityKind::GradingSystem,
                found: self.kind,
            });
        }
        let ranges: Vec<GradeRange> = self
            .records
            .into_iter()
            .filter_map(|record| match record {
                DomainRecord::GradeRange(range) => Some(range),
                _ => None,
            })
            .collect();
        Ok(GradingSystem::new(name, ranges)?)
    }
}

/// Import workbook bytes as records of `kind`.
///
/// Fails only when the bytes are not a readable workbook; every row-level
/// problem is returned in [`ImportOutcome::result`].
pub fn import(kind: EntityKind, bytes: &[u8], options: &ImportOptions) -> Result<ImportOutcome> {
    let span = info_span!("import", entity = %kind);
    let _guard = span.enter();

    let table = read_table(bytes)?;
    check_headers(get_schema(kind), &table.headers);
    Ok(import_rows(kind, &table.rows, options))
}

/// Import by entity type name such as `"student"` or `"grading-system"`.
pub fn import_by_name(name: &str, bytes: &[u8], options: &ImportOptions) -> Result<ImportOutcome> {
    let kind: EntityKind = name.parse()?;
    import(kind, bytes, options)
}

/// Validate and build already-read rows.
pub fn import_rows(kind: EntityKind, rows: &[RawRow], options: &ImportOptions) -> ImportOutcome {
    let schema = get_schema(kind);
    let validation = validate_rows(schema, rows, &options.validation());
    let (records, failures) =
        build_records(kind, rows, &validation.accepted, &options.build_context());

    let mut errors = validation.errors;
    errors.extend(failures.iter().map(|failure| failure.to_validation_error()));
    let result = ValidationResult::new(errors, records.len(), rows.len());

    info!(
        total = result.total_row_count,
        valid = result.valid_row_count,
        errors = result.errors.len(),
        "import finished"
    );

    ImportOutcome {
        kind,
        result,
        records,
    }
}

/// Log headers the schema does not know and required columns the sheet lacks.
fn check_headers(schema: &EntitySchema, headers: &[String]) {
    for header in headers {
        if schema.column(header).is_none() {
            warn!(header = %header, "ignoring unknown column");
        }
    }
    for column in schema.required_columns() {
        if !headers.iter().any(|header| column.matches(header)) {
            warn!(column = column.header, "required column missing from sheet");
        }
    }
    debug!(columns = headers.len(), "checked headers");
}
