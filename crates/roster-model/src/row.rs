//! Unvalidated spreadsheet rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::ColumnSchema;

/// One data row read from a sheet, keyed by header label.
///
/// `row` is the 1-based source row number: the header occupies row 1, so the
/// first data row is row 2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub row: usize,
    pub values: BTreeMap<String, String>,
}

impl RawRow {
    /// Create an empty row at the given source row number.
    pub fn new(row: usize) -> Self {
        Self {
            row,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style cell insert.
    #[must_use]
    pub fn with(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(header, value);
        self
    }

    /// Set a cell value.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.values.insert(header.into(), value.into());
    }

    /// Raw value for a header, trimmed, or `None` when absent or blank.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.values
            .get(header)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// First non-blank value among several header labels.
    pub fn get_any<'a>(&self, headers: impl IntoIterator<Item = &'a str>) -> Option<&str> {
        headers.into_iter().find_map(|header| self.get(header))
    }

    /// Value of a schema column, looked up by header then aliases.
    pub fn value_for(&self, column: &ColumnSchema) -> Option<&str> {
        self.get_any(column.labels())
    }

    /// Whether every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }
}
