//! Header-keyed rows to workbook bytes.

use roster_model::{DomainRecord, EntityKind, EntitySchema, RawRow};
use roster_normalization::parse_numeric;
use roster_schema::get_schema;
use roster_xlsx::{CellValue, Sheet, write_sheet};
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::rows::record_to_row;

/// Serialize records of one entity kind to workbook bytes.
///
/// The sheet is named for the entity type; row 1 holds the schema headers in
/// declared order and each record follows in input order.
pub fn write_records(kind: EntityKind, records: &[DomainRecord]) -> Result<Vec<u8>> {
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if record.kind() == kind {
                Ok(record_to_row(record, index + 2))
            } else {
                Err(OutputError::MixedRecords {
                    expected: kind,
                    found: record.kind(),
                })
            }
        })
        .collect::<Result<Vec<_>>>()?;
    write_rows(get_schema(kind), &rows)
}

/// Serialize header-keyed rows under a schema's header row.
pub fn write_rows(schema: &EntitySchema, rows: &[RawRow]) -> Result<Vec<u8>> {
    let sheet = build_sheet(schema, rows);
    let bytes = write_sheet(&sheet)?;
    debug!(
        entity = %schema.kind,
        rows = rows.len(),
        bytes = bytes.len(),
        "serialized workbook"
    );
    Ok(bytes)
}

pub(crate) fn build_sheet(schema: &EntitySchema, rows: &[RawRow]) -> Sheet {
    let mut sheet = Sheet::new(schema.kind.as_str());
    sheet.add_row(schema.headers());
    for row in rows {
        sheet.add_row(schema.columns.iter().map(|column| {
            let value = row.value_for(column).unwrap_or_default();
            if column.field_type.is_numeric()
                && let Some(number) = parse_numeric(value)
            {
                CellValue::Number(number)
            } else {
                CellValue::text(value)
            }
        }));
    }
    sheet
}
