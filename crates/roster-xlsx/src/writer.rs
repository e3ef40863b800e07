//! Workbook writer.
//!
//! Produces a minimal single-sheet package: content types, package and
//! workbook relationships, the workbook part and one worksheet. Text is
//! written as inline strings so no shared string table is needed.

use std::io::{Cursor, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Result, XlsxError};
use crate::refs::cell_reference;
use crate::types::{CellValue, Sheet, SheetRow};

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

/// Longest sheet name spreadsheet applications accept.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const MIN_COLUMN_WIDTH: usize = 8;
const MAX_COLUMN_WIDTH: usize = 60;

/// Make a sheet name acceptable to spreadsheet applications.
///
/// Strips `[ ] : * ? / \`, trims surrounding apostrophes and truncates to
/// 31 characters. An empty result becomes `Sheet1`.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .collect();
    let truncated: String = cleaned
        .trim()
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    if truncated.trim().is_empty() {
        "Sheet1".to_string()
    } else {
        truncated
    }
}

/// Serialize a sheet into workbook bytes.
pub fn write_sheet(sheet: &Sheet) -> Result<Vec<u8>> {
    let mut writer = XlsxWriter::new(Cursor::new(Vec::new()));
    writer.write(sheet)?;
    Ok(writer.finish()?.into_inner())
}

/// Write a sheet to a workbook file.
pub fn write_xlsx(path: &Path, sheet: &Sheet) -> Result<()> {
    let bytes = write_sheet(sheet)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Writer for single-sheet workbooks.
pub struct XlsxWriter<W: Write + std::io::Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: Write + std::io::Seek> XlsxWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    /// Write every package part for `sheet`.
    pub fn write(&mut self, sheet: &Sheet) -> Result<()> {
        let name = sanitize_sheet_name(&sheet.name);
        self.part("[Content_Types].xml", CONTENT_TYPES.as_bytes())?;
        self.part("_rels/.rels", PACKAGE_RELS.as_bytes())?;
        self.part("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.as_bytes())?;
        self.part("xl/workbook.xml", &workbook_xml(&name)?)?;
        self.part("xl/worksheets/sheet1.xml", &worksheet_xml(sheet)?)?;
        debug!(sheet = %name, rows = sheet.num_rows(), "wrote workbook");
        Ok(())
    }

    pub fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }

    fn part(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(content)?;
        Ok(())
    }
}

fn emit(xml: &mut Writer<Vec<u8>>, event: Event<'_>, part: &str) -> Result<()> {
    xml.write_event(event)
        .map_err(|err| XlsxError::malformed_xml(part, err))
}

fn workbook_xml(sheet_name: &str) -> Result<Vec<u8>> {
    let part = "xl/workbook.xml";
    let mut xml = Writer::new(Vec::new());
    emit(
        &mut xml,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
        part,
    )?;

    let mut root = BytesStart::new("workbook");
    root.push_attribute(("xmlns", MAIN_NS));
    root.push_attribute(("xmlns:r", REL_NS));
    emit(&mut xml, Event::Start(root), part)?;
    emit(&mut xml, Event::Start(BytesStart::new("sheets")), part)?;

    let mut sheet = BytesStart::new("sheet");
    sheet.push_attribute(("name", sheet_name));
    sheet.push_attribute(("sheetId", "1"));
    sheet.push_attribute(("r:id", "rId1"));
    emit(&mut xml, Event::Empty(sheet), part)?;

    emit(&mut xml, Event::End(BytesEnd::new("sheets")), part)?;
    emit(&mut xml, Event::End(BytesEnd::new("workbook")), part)?;
    Ok(xml.into_inner())
}

fn worksheet_xml(sheet: &Sheet) -> Result<Vec<u8>> {
    let part = "xl/worksheets/sheet1.xml";
    let mut xml = Writer::new(Vec::new());
    emit(
        &mut xml,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
        part,
    )?;

    let mut root = BytesStart::new("worksheet");
    root.push_attribute(("xmlns", MAIN_NS));
    root.push_attribute(("xmlns:r", REL_NS));
    emit(&mut xml, Event::Start(root), part)?;

    let widths = column_widths(sheet);
    if !widths.is_empty() {
        emit(&mut xml, Event::Start(BytesStart::new("cols")), part)?;
        for (index, width) in widths.iter().enumerate() {
            let position = (index + 1).to_string();
            let mut col = BytesStart::new("col");
            col.push_attribute(("min", position.as_str()));
            col.push_attribute(("max", position.as_str()));
            col.push_attribute(("width", width.to_string().as_str()));
            col.push_attribute(("customWidth", "1"));
            emit(&mut xml, Event::Empty(col), part)?;
        }
        emit(&mut xml, Event::End(BytesEnd::new("cols")), part)?;
    }

    emit(&mut xml, Event::Start(BytesStart::new("sheetData")), part)?;
    for row in &sheet.rows {
        write_row(&mut xml, row, part)?;
    }
    emit(&mut xml, Event::End(BytesEnd::new("sheetData")), part)?;
    emit(&mut xml, Event::End(BytesEnd::new("worksheet")), part)?;
    Ok(xml.into_inner())
}

fn write_row(xml: &mut Writer<Vec<u8>>, row: &SheetRow, part: &str) -> Result<()> {
    let mut start = BytesStart::new("row");
    start.push_attribute(("r", row.number.to_string().as_str()));
    emit(xml, Event::Start(start), part)?;

    for (column, value) in &row.cells {
        let reference = cell_reference(*column, row.number);
        let mut cell = BytesStart::new("c");
        cell.push_attribute(("r", reference.as_str()));
        match value {
            CellValue::Empty => continue,
            CellValue::Number(number) if !number.is_finite() => continue,
            CellValue::Text(text) => {
                cell.push_attribute(("t", "inlineStr"));
                emit(xml, Event::Start(cell), part)?;
                emit(xml, Event::Start(BytesStart::new("is")), part)?;
                let mut t = BytesStart::new("t");
                if text.trim() != text {
                    t.push_attribute(("xml:space", "preserve"));
                }
                emit(xml, Event::Start(t), part)?;
                emit(xml, Event::Text(BytesText::new(text)), part)?;
                emit(xml, Event::End(BytesEnd::new("t")), part)?;
                emit(xml, Event::End(BytesEnd::new("is")), part)?;
                emit(xml, Event::End(BytesEnd::new("c")), part)?;
                continue;
            }
            CellValue::Bool(_) => cell.push_attribute(("t", "b")),
            CellValue::Error(_) => cell.push_attribute(("t", "e")),
            CellValue::Number(_) => {}
        }
        let raw = match value {
            CellValue::Number(number) => number.to_string(),
            CellValue::Bool(flag) => String::from(if *flag { "1" } else { "0" }),
            CellValue::Error(code) => code.clone(),
            CellValue::Empty | CellValue::Text(_) => String::new(),
        };
        emit(xml, Event::Start(cell), part)?;
        emit(xml, Event::Start(BytesStart::new("v")), part)?;
        emit(xml, Event::Text(BytesText::new(&raw)), part)?;
        emit(xml, Event::End(BytesEnd::new("v")), part)?;
        emit(xml, Event::End(BytesEnd::new("c")), part)?;
    }

    emit(xml, Event::End(BytesEnd::new("row")), part)
}

/// Column widths in characters, sized to the longest value per column.
fn column_widths(sheet: &Sheet) -> Vec<usize> {
    let columns = sheet.rows.iter().map(SheetRow::width).max().unwrap_or(0) as usize;
    let mut widths = vec![MIN_COLUMN_WIDTH; columns];
    for row in &sheet.rows {
        for (column, value) in &row.cells {
            let len = match value {
                CellValue::Text(text) | CellValue::Error(text) => text.chars().count(),
                CellValue::Number(number) => number.to_string().len(),
                CellValue::Bool(_) => 5,
                CellValue::Empty => 0,
            };
            let slot = &mut widths[*column as usize];
            *slot = (*slot).max((len + 2).min(MAX_COLUMN_WIDTH));
        }
    }
    widths
}
