use std::path::Path;

use roster_model::RawRow;
use roster_normalization::format_number;
use roster_xlsx::{CellValue, Sheet, SheetRow, read_first_sheet};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};

/// First sheet of an uploaded workbook, split into header labels and data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    /// Header labels in column order, trimmed. Blank header cells are omitted.
    pub headers: Vec<String>,
    /// Non-blank data rows in source order.
    pub rows: Vec<RawRow>,
}

impl SheetTable {
    pub fn has_header(&self, label: &str) -> bool {
        self.headers.iter().any(|header| header == label)
    }
}

/// Read header-keyed rows from workbook bytes.
///
/// The first sheet is always used. Row numbers are the sheet's own 1-based
/// numbers, so the first data row under a row-1 header is row 2.
pub fn read_rows(bytes: &[u8]) -> Result<Vec<RawRow>> {
    Ok(read_table(bytes)?.rows)
}

/// Read the first sheet of workbook bytes as a [`SheetTable`].
pub fn read_table(bytes: &[u8]) -> Result<SheetTable> {
    let sheet = read_first_sheet(bytes)?;
    Ok(table_from_sheet(&sheet))
}

/// Read a workbook file from disk.
pub fn read_table_from_path(path: &Path) -> Result<SheetTable> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(&bytes)
}

/// Split an already-decoded sheet into headers and rows.
pub fn table_from_sheet(sheet: &Sheet) -> SheetTable {
    let Some((header_row, data_rows)) = sheet.rows.split_first() else {
        debug!(sheet = %sheet.name, "sheet is empty");
        return SheetTable {
            sheet_name: sheet.name.clone(),
            headers: Vec::new(),
            rows: Vec::new(),
        };
    };

    let columns = header_columns(header_row);
    let mut rows = Vec::with_capacity(data_rows.len());
    let mut skipped = 0usize;
    for source in data_rows {
        let row = raw_row(source, &columns);
        if row.is_blank() {
            skipped += 1;
            continue;
        }
        trace!(row = row.row, cells = row.values.len(), "read row");
        rows.push(row);
    }

    debug!(
        sheet = %sheet.name,
        headers = columns.len(),
        rows = rows.len(),
        blank_rows = skipped,
        "read sheet"
    );

    SheetTable {
        sheet_name: sheet.name.clone(),
        headers: columns.into_iter().map(|(_, header)| header).collect(),
        rows,
    }
}

/// `(column index, label)` for each non-blank header cell; the first of any
/// duplicated label wins.
fn header_columns(row: &SheetRow) -> Vec<(u32, String)> {
    let mut columns: Vec<(u32, String)> = Vec::new();
    for (index, value) in &row.cells {
        let label = normalize_header(&cell_text(value));
        if label.is_empty() || columns.iter().any(|(_, existing)| *existing == label) {
            continue;
        }
        columns.push((*index, label));
    }
    columns
}

fn raw_row(source: &SheetRow, columns: &[(u32, String)]) -> RawRow {
    let mut row = RawRow::new(source.number as usize);
    for (index, header) in columns {
        let value = source.get(*index).map(cell_text).unwrap_or_default();
        row.insert(header.clone(), value);
    }
    row
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cell contents as the string a user would see.
///
/// Formula errors such as `#N/A` read as blank.
fn cell_text(value: &CellValue) -> String {
    match value {
        CellValue::Empty | CellValue::Error(_) => String::new(),
        CellValue::Text(text) => text.trim().to_string(),
        CellValue::Number(number) => format_number(*number),
        CellValue::Bool(true) => "TRUE".to_string(),
        CellValue::Bool(false) => "FALSE".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: Vec<Vec<CellValue>>) -> Sheet {
        let mut sheet = Sheet::new("student");
        for row in rows {
            sheet.add_row(row);
        }
        sheet
    }

    #[test]
    fn test_header_then_rows() {
        let table = table_from_sheet(&sheet(vec![
            vec![" First Name ".into(), "Grade".into()],
            vec!["Ada".into(), 8.0.into()],
        ]));
        assert_eq!(table.headers, vec!["First Name", "Grade"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].row, 2);
        assert_eq!(table.rows[0].get("First Name"), Some("Ada"));
        assert_eq!(table.rows[0].get("Grade"), Some("8"));
    }

    #[test]
    fn test_blank_rows_skipped_numbers_kept() {
        let table = table_from_sheet(&sheet(vec![
            vec!["First Name".into()],
            vec!["Ada".into()],
            vec![CellValue::text("   ")],
            vec!["Bwalya".into()],
        ]));
        let numbers: Vec<_> = table.rows.iter().map(|row| row.row).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_duplicate_header_first_wins() {
        let table = table_from_sheet(&sheet(vec![
            vec!["Stream".into(), "Stream".into()],
            vec!["A".into(), "B".into()],
        ]));
        assert_eq!(table.headers, vec!["Stream"]);
        assert_eq!(table.rows[0].get("Stream"), Some("A"));
    }

    #[test]
    fn test_missing_cells_read_as_blank() {
        let table = table_from_sheet(&sheet(vec![
            vec!["First Name".into(), "Stream".into()],
            vec!["Ada".into()],
        ]));
        assert_eq!(table.rows[0].values.get("Stream").map(String::as_str), Some(""));
    }

    #[test]
    fn test_empty_sheet() {
        let table = table_from_sheet(&Sheet::new("empty"));
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&CellValue::Number(40313.0)), "40313");
        assert_eq!(cell_text(&CellValue::Number(3.5)), "3.5");
        assert_eq!(cell_text(&CellValue::Bool(true)), "TRUE");
        assert_eq!(cell_text(&CellValue::Error("#N/A".into())), "");
    }
}
