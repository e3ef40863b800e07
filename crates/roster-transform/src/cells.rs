//! Typed access to a row through its schema.

use chrono::NaiveDate;
use roster_model::{ColumnSchema, EntitySchema, RawRow};
use roster_normalization::{normalize_text, parse_date_value, parse_integer, parse_numeric};

use crate::error::{Result, TransformError};

pub(crate) struct Cells<'a> {
    row: &'a RawRow,
    schema: &'static EntitySchema,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(row: &'a RawRow, schema: &'static EntitySchema) -> Self {
        Self { row, schema }
    }

    pub(crate) fn row_number(&self) -> usize {
        self.row.row
    }

    fn column(&self, field: &str) -> Option<&'static ColumnSchema> {
        self.schema.column_for_field(field)
    }

    fn header(&self, field: &'static str) -> &'static str {
        self.column(field).map_or(field, |column| column.header)
    }

    /// Trimmed raw value, `None` when blank.
    pub(crate) fn raw(&self, field: &str) -> Option<&'a str> {
        let row = self.row;
        self.column(field).and_then(|column| row.value_for(column))
    }

    pub(crate) fn required(&self, field: &'static str) -> Result<&'a str> {
        self.raw(field).ok_or(TransformError::MissingField {
            row: self.row.row,
            field: self.header(field),
        })
    }

    fn invalid(&self, field: &'static str, value: &str) -> TransformError {
        TransformError::InvalidValue {
            row: self.row.row,
            field: self.header(field),
            value: value.to_string(),
        }
    }

    /// Optional text; blank becomes `""`.
    pub(crate) fn text(&self, field: &str) -> String {
        self.raw(field).map(normalize_text).unwrap_or_default()
    }

    pub(crate) fn required_text(&self, field: &'static str) -> Result<String> {
        self.required(field).map(normalize_text)
    }

    pub(crate) fn required_date(&self, field: &'static str) -> Result<NaiveDate> {
        let raw = self.required(field)?;
        parse_date_value(raw).ok_or_else(|| self.invalid(field, raw))
    }

    /// Optional date; blank or unparseable becomes `None`.
    pub(crate) fn date(&self, field: &str) -> Option<NaiveDate> {
        self.raw(field).and_then(parse_date_value)
    }

    pub(crate) fn required_integer<T: TryFrom<i64>>(&self, field: &'static str) -> Result<T> {
        let raw = self.required(field)?;
        parse_integer(raw)
            .and_then(|value| T::try_from(value).ok())
            .ok_or_else(|| self.invalid(field, raw))
    }

    pub(crate) fn required_number(&self, field: &'static str) -> Result<f64> {
        let raw = self.required(field)?;
        parse_numeric(raw).ok_or_else(|| self.invalid(field, raw))
    }

    pub(crate) fn number(&self, field: &str) -> Option<f64> {
        self.raw(field).and_then(parse_numeric)
    }
}
