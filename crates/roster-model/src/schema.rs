//! Declarative column definitions.
//!
//! A schema maps spreadsheet header labels to record fields. Header labels
//! are exact and case-sensitive; aliases cover historical label variants.

use serde::Serialize;

use crate::entity::EntityKind;

/// Value type of a column, which also selects its normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    /// Free text, trimmed.
    Text,
    /// Calendar date, normalized to ISO `YYYY-MM-DD`.
    Date,
    /// Gender code, normalized to `M` or `F`.
    Gender,
    /// Email address, syntax-checked.
    Email,
    /// Whole number within an inclusive range (no upper bound when `max` is `None`).
    Integer { min: i64, max: Option<i64> },
    /// Percentage score in `0..=100`.
    Score,
    /// Non-negative decimal number.
    Decimal,
    /// Staff role from the allowed role set.
    Role,
    /// `Pass` or `Fail`.
    PassFail,
    /// Letter grade, upper-cased.
    LetterGrade,
    /// Comma-separated list.
    List,
}

impl FieldType {
    /// Whether values of this type are written as numeric cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer { .. } | Self::Score | Self::Decimal)
    }
}

/// One column of an entity schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    /// Exact header label used on export and matched on import.
    pub header: &'static str,
    /// Target record field name.
    pub field: &'static str,
    /// Whether the row is rejected when this column fails validation.
    pub required: bool,
    /// Value type and normalizer.
    pub field_type: FieldType,
    /// Alternate header labels accepted on import.
    pub aliases: &'static [&'static str],
}

impl ColumnSchema {
    /// Define a required column.
    pub const fn required(header: &'static str, field: &'static str, field_type: FieldType) -> Self {
        Self {
            header,
            field,
            required: true,
            field_type,
            aliases: &[],
        }
    }

    /// Define an optional column.
    pub const fn optional(header: &'static str, field: &'static str, field_type: FieldType) -> Self {
        Self {
            header,
            field,
            required: false,
            field_type,
            aliases: &[],
        }
    }

    /// Attach alternate header labels.
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Header label followed by its aliases.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.header).chain(self.aliases.iter().copied())
    }

    /// Whether `label` names this column (header or alias).
    pub fn matches(&self, label: &str) -> bool {
        self.header == label || self.aliases.contains(&label)
    }
}

/// Ordered column list for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub columns: &'static [ColumnSchema],
}

impl EntitySchema {
    /// Look up a column by header label or alias.
    pub fn column(&self, label: &str) -> Option<&'static ColumnSchema> {
        self.columns.iter().find(|column| column.matches(label))
    }

    /// Look up a column by target field name.
    pub fn column_for_field(&self, field: &str) -> Option<&'static ColumnSchema> {
        self.columns.iter().find(|column| column.field == field)
    }

    /// Header labels in declared order.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.header).collect()
    }

    /// Required columns in declared order.
    pub fn required_columns(&self) -> impl Iterator<Item = &'static ColumnSchema> {
        self.columns.iter().filter(|column| column.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnSchema] = &[
        ColumnSchema::required("Grade", "grade_level", FieldType::Integer {
            min: 1,
            max: Some(12),
        })
        .with_aliases(&["Grade Level"]),
        ColumnSchema::optional("Stream", "stream", FieldType::Text),
    ];

    #[test]
    fn test_column_lookup_by_alias() {
        let schema = EntitySchema {
            kind: EntityKind::Student,
            columns: COLUMNS,
        };
        assert_eq!(schema.column("Grade Level").map(|c| c.header), Some("Grade"));
        assert_eq!(schema.column("Grade").map(|c| c.field), Some("grade_level"));
        assert!(schema.column("grade").is_none());
    }

    #[test]
    fn test_required_columns() {
        let schema = EntitySchema {
            kind: EntityKind::Student,
            columns: COLUMNS,
        };
        let required: Vec<_> = schema.required_columns().map(|c| c.header).collect();
        assert_eq!(required, vec!["Grade"]);
        assert_eq!(schema.headers(), vec!["Grade", "Stream"]);
    }
}
