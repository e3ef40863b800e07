//! Workbook reader.
//!
//! Only the first worksheet is read. The sheet part is located through
//! `xl/workbook.xml` and its relationships; packages without a workbook
//! part fall back to `xl/worksheets/sheet1.xml`.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Result, XlsxError};
use crate::refs::parse_cell_reference;
use crate::types::{CellValue, Sheet, SheetRow};

const WORKBOOK_PART: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const FALLBACK_SHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Read the first worksheet of a workbook held in memory.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Sheet> {
    XlsxReader::new(Cursor::new(bytes))?.first_sheet()
}

/// Read the first worksheet of a workbook file.
pub fn read_xlsx(path: &Path) -> Result<Sheet> {
    let bytes = std::fs::read(path)?;
    read_first_sheet(&bytes)
}

#[derive(Debug, Clone)]
struct SheetEntry {
    name: String,
    part: String,
}

/// Reader over an OOXML spreadsheet package.
pub struct XlsxReader<R: Read + Seek> {
    archive: ZipArchive<R>,
    sheets: Vec<SheetEntry>,
    shared_strings: Vec<String>,
}

impl<R: Read + Seek> XlsxReader<R> {
    pub fn new(reader: R) -> Result<Self> {
        let mut archive =
            ZipArchive::new(reader).map_err(|err| XlsxError::not_a_workbook(err.to_string()))?;

        let sheets = match read_part(&mut archive, WORKBOOK_PART)? {
            Some(workbook) => {
                let declared = parse_workbook(&workbook)?;
                if declared.is_empty() {
                    return Err(XlsxError::NoSheets);
                }
                let targets = match read_part(&mut archive, WORKBOOK_RELS_PART)? {
                    Some(rels) => parse_relationships(&rels)?,
                    None => HashMap::new(),
                };
                declared
                    .into_iter()
                    .enumerate()
                    .map(|(index, (name, rel_id))| {
                        let part = rel_id
                            .and_then(|id| targets.get(&id))
                            .map(|target| resolve_target("xl", target))
                            .unwrap_or_else(|| format!("xl/worksheets/sheet{}.xml", index + 1));
                        SheetEntry { name, part }
                    })
                    .collect()
            }
            None if archive.index_for_name(FALLBACK_SHEET_PART).is_some() => vec![SheetEntry {
                name: "Sheet1".to_string(),
                part: FALLBACK_SHEET_PART.to_string(),
            }],
            None => return Err(XlsxError::missing_part(WORKBOOK_PART)),
        };

        let shared_strings = match read_part(&mut archive, SHARED_STRINGS_PART)? {
            Some(xml) => parse_shared_strings(&xml)?,
            None => Vec::new(),
        };

        debug!(
            sheets = sheets.len(),
            shared_strings = shared_strings.len(),
            "opened workbook"
        );

        Ok(Self {
            archive,
            sheets,
            shared_strings,
        })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn first_sheet(&mut self) -> Result<Sheet> {
        self.read_sheet(0)
    }

    /// Read the sheet at a 0-based workbook position.
    pub fn read_sheet(&mut self, index: usize) -> Result<Sheet> {
        let entry = self.sheets.get(index).cloned().ok_or(XlsxError::NoSheets)?;
        let xml = read_part(&mut self.archive, &entry.part)?
            .ok_or_else(|| XlsxError::missing_part(&entry.part))?;
        let rows = parse_worksheet(&xml, &entry.part, &self.shared_strings)?;
        debug!(sheet = %entry.name, rows = rows.len(), "read worksheet");
        Ok(Sheet {
            name: entry.name,
            rows,
        })
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, part: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(part) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|err| XlsxError::malformed_xml(part, err))?;
    Ok(Some(text.trim_start_matches('\u{feff}').to_string()))
}

/// Resolve a relationship target against the directory of its source part.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn attribute(element: &BytesStart<'_>, name: &[u8], part: &str) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(|err| XlsxError::malformed_xml(part, err))?;
        if attr.key.local_name().as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| XlsxError::malformed_xml(part, err))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn decode_text(raw: &[u8], part: &str) -> Result<String> {
    let text = std::str::from_utf8(raw).map_err(|err| XlsxError::malformed_xml(part, err))?;
    quick_xml::escape::unescape(text)
        .map(|text| text.into_owned())
        .map_err(|err| XlsxError::malformed_xml(part, err))
}

fn resolve_entity(reference: &BytesRef<'_>, part: &str) -> Result<String> {
    let name = std::str::from_utf8(reference).map_err(|err| XlsxError::malformed_xml(part, err))?;
    let resolved = match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => name.strip_prefix('#').and_then(|code| {
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => code.parse().ok(),
            };
            value.and_then(char::from_u32)
        }),
    };
    resolved
        .map(String::from)
        .ok_or_else(|| XlsxError::malformed_xml(part, format!("unknown entity &{name};")))
}

/// `(sheet name, relationship id)` pairs in workbook order.
fn parse_workbook(xml: &str) -> Result<Vec<(String, Option<String>)>> {
    let mut reader = Reader::from_str(xml);
    let mut sheets = Vec::new();
    loop {
        match reader
            .read_event()
            .map_err(|err| XlsxError::malformed_xml(WORKBOOK_PART, err))?
        {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                let name = attribute(&e, b"name", WORKBOOK_PART)?
                    .unwrap_or_else(|| format!("Sheet{}", sheets.len() + 1));
                let rel_id = attribute(&e, b"id", WORKBOOK_PART)?;
                sheets.push((name, rel_id));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(sheets)
}

fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();
    loop {
        match reader
            .read_event()
            .map_err(|err| XlsxError::malformed_xml(WORKBOOK_RELS_PART, err))?
        {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let id = attribute(&e, b"Id", WORKBOOK_RELS_PART)?;
                let target = attribute(&e, b"Target", WORKBOOK_RELS_PART)?;
                if let (Some(id), Some(target)) = (id, target) {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(targets)
}

/// Shared string table. Rich-text runs are concatenated; phonetic runs are dropped.
fn parse_shared_strings(xml: &str) -> Result<Vec<String>> {
    let part = SHARED_STRINGS_PART;
    let mut reader = Reader::from_str(xml);
    let mut strings = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut in_phonetic = false;
    loop {
        match reader
            .read_event()
            .map_err(|err| XlsxError::malformed_xml(part, err))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"si" => current = Some(String::new()),
                b"rPh" => in_phonetic = true,
                b"t" => in_text = current.is_some() && !in_phonetic,
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"si" => strings.push(String::new()),
            Event::Text(text) if in_text => {
                if let Some(current) = current.as_mut() {
                    current.push_str(&decode_text(&text, part)?);
                }
            }
            Event::CData(data) if in_text => {
                if let Some(current) = current.as_mut() {
                    current.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::GeneralRef(reference) if in_text => {
                if let Some(current) = current.as_mut() {
                    current.push_str(&resolve_entity(&reference, part)?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"rPh" => in_phonetic = false,
                b"si" => {
                    if let Some(done) = current.take() {
                        strings.push(done);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(strings)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Capture {
    Value,
    InlineText,
}

struct PendingCell {
    column: u32,
    kind: Option<String>,
    value: String,
    inline: String,
}

impl PendingCell {
    fn push_text(&mut self, capture: Capture, text: &str) {
        match capture {
            Capture::Value => self.value.push_str(text),
            Capture::InlineText => self.inline.push_str(text),
        }
    }

    fn resolve(self, shared: &[String], part: &str) -> Result<CellValue> {
        let value = self.value.trim();
        let resolved = match self.kind.as_deref() {
            Some("s") => {
                if value.is_empty() {
                    return Ok(CellValue::Empty);
                }
                let index: usize = value.parse().map_err(|_| {
                    XlsxError::malformed_xml(part, format!("invalid shared string index '{value}'"))
                })?;
                let text = shared.get(index).ok_or(XlsxError::SharedStringIndex {
                    index,
                    len: shared.len(),
                })?;
                CellValue::text(text.clone())
            }
            Some("inlineStr") => CellValue::text(self.inline),
            Some("str") | Some("d") => CellValue::text(self.value),
            Some("b") => CellValue::Bool(value == "1" || value.eq_ignore_ascii_case("true")),
            Some("e") => CellValue::Error(value.to_string()),
            _ if value.is_empty() => CellValue::Empty,
            _ => match value.parse::<f64>() {
                Ok(number) => CellValue::Number(number),
                Err(_) => CellValue::text(self.value),
            },
        };
        Ok(resolved)
    }
}

fn start_cell(element: &BytesStart<'_>, next_column: u32, part: &str) -> Result<PendingCell> {
    let column = match attribute(element, b"r", part)? {
        Some(reference) => parse_cell_reference(&reference)?.0,
        None => next_column,
    };
    Ok(PendingCell {
        column,
        kind: attribute(element, b"t", part)?,
        value: String::new(),
        inline: String::new(),
    })
}

fn start_row(element: &BytesStart<'_>, last_row: u32, part: &str) -> Result<SheetRow> {
    let number = attribute(element, b"r", part)?
        .and_then(|r| r.trim().parse().ok())
        .unwrap_or(last_row + 1);
    Ok(SheetRow::new(number))
}

fn parse_worksheet(xml: &str, part: &str, shared: &[String]) -> Result<Vec<SheetRow>> {
    let mut reader = Reader::from_str(xml);
    let mut rows = Vec::new();
    let mut row: Option<SheetRow> = None;
    let mut cell: Option<PendingCell> = None;
    let mut capture: Option<Capture> = None;
    let mut in_inline = false;
    let mut in_phonetic = false;
    let mut last_row = 0;
    let mut next_column = 0;

    loop {
        match reader
            .read_event()
            .map_err(|err| XlsxError::malformed_xml(part, err))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => {
                    let started = start_row(&e, last_row, part)?;
                    last_row = started.number;
                    next_column = 0;
                    row = Some(started);
                }
                b"c" => cell = Some(start_cell(&e, next_column, part)?),
                b"v" if cell.is_some() => capture = Some(Capture::Value),
                b"is" => in_inline = true,
                b"rPh" => in_phonetic = true,
                b"t" if in_inline && !in_phonetic => capture = Some(Capture::InlineText),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"row" => last_row = start_row(&e, last_row, part)?.number,
                b"c" => next_column = start_cell(&e, next_column, part)?.column + 1,
                _ => {}
            },
            Event::Text(text) => {
                if let (Some(capture), Some(cell)) = (capture, cell.as_mut()) {
                    cell.push_text(capture, &decode_text(&text, part)?);
                }
            }
            Event::CData(data) => {
                if let (Some(capture), Some(cell)) = (capture, cell.as_mut()) {
                    cell.push_text(capture, &String::from_utf8_lossy(&data));
                }
            }
            Event::GeneralRef(reference) => {
                if let (Some(capture), Some(cell)) = (capture, cell.as_mut()) {
                    cell.push_text(capture, &resolve_entity(&reference, part)?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"v" | b"t" => capture = None,
                b"is" => in_inline = false,
                b"rPh" => in_phonetic = false,
                b"c" => {
                    if let Some(done) = cell.take() {
                        let column = done.column;
                        next_column = column + 1;
                        let value = done.resolve(shared, part)?;
                        if let (Some(row), false) = (row.as_mut(), matches!(value, CellValue::Empty))
                        {
                            row.push(column, value);
                        }
                    }
                }
                b"row" => {
                    if let Some(done) = row.take()
                        && !done.cells.is_empty()
                    {
                        rows.push(done);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(rows)
}
