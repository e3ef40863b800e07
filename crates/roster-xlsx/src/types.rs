//! In-memory sheet representation.

/// Value of a single worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Formula error literal such as `#DIV/0!`.
    Error(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One worksheet row.
///
/// `number` is the 1-based row number as it appears in the sheet; gaps are
/// preserved so callers can report positions users recognise.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub number: u32,
    /// Cells in ascending column order, keyed by 0-based column index.
    pub cells: Vec<(u32, CellValue)>,
}

impl SheetRow {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            cells: Vec::new(),
        }
    }

    /// Cell at a 0-based column index.
    pub fn get(&self, column: u32) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(index, _)| *index == column)
            .map(|(_, value)| value)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, value)| value.is_empty())
    }

    /// Highest populated column index plus one.
    pub fn width(&self) -> u32 {
        self.cells.last().map_or(0, |(index, _)| index + 1)
    }

    pub(crate) fn push(&mut self, column: u32, value: CellValue) {
        match self.cells.binary_search_by_key(&column, |(index, _)| *index) {
            Ok(position) => self.cells[position].1 = value,
            Err(position) => self.cells.insert(position, (column, value)),
        }
    }
}

/// A named worksheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row directly below the last one.
    pub fn add_row<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let number = self.rows.last().map_or(1, |row| row.number + 1);
        let mut row = SheetRow::new(number);
        for (column, value) in values.into_iter().enumerate() {
            let value = value.into();
            if !matches!(value, CellValue::Empty) {
                row.push(column as u32, value);
            }
        }
        self.rows.push(row);
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}
