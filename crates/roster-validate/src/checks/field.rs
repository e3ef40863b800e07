//! Single-cell checks.

use roster_model::{ColumnSchema, FieldType, RawRow, TeacherRole, ValidationError};
use roster_normalization::{
    is_known_gender, is_valid_email, normalize_pass_fail, parse_date_value, parse_integer,
    parse_numeric,
};

use crate::options::{GenderPolicy, ValidationOptions};

/// Check one column of one row.
///
/// A blank cell is an error only for required columns. Every other failure
/// carries the raw value.
pub fn check(
    row: &RawRow,
    column: &ColumnSchema,
    options: &ValidationOptions,
) -> Option<ValidationError> {
    let Some(raw) = row.value_for(column) else {
        return column
            .required
            .then(|| ValidationError::required(row.row, column.header));
    };

    let message = check_value(raw, column, options)?;
    Some(ValidationError::new(row.row, column.header, message).with_value(raw))
}

/// Failure message for a present value, or `None` when it is acceptable.
fn check_value(raw: &str, column: &ColumnSchema, options: &ValidationOptions) -> Option<String> {
    let field = column.header;
    match column.field_type {
        FieldType::Text | FieldType::LetterGrade | FieldType::List => None,
        FieldType::Date => parse_date_value(raw).is_none().then(|| {
            format!("{field} must be a valid date (YYYY-MM-DD, DD/MM/YYYY or a spreadsheet date)")
        }),
        FieldType::Gender => match options.gender_policy {
            GenderPolicy::Strict if !is_known_gender(raw) => {
                Some(format!("{field} must be M or F"))
            }
            _ => None,
        },
        FieldType::Email => {
            (!is_valid_email(raw)).then(|| format!("{field} must be a valid email address"))
        }
        FieldType::Integer { min, max } => {
            let in_range = parse_integer(raw)
                .is_some_and(|value| value >= min && max.is_none_or(|max| value <= max));
            (!in_range).then(|| integer_message(field, min, max))
        }
        FieldType::Score => {
            let in_range = parse_numeric(raw).is_some_and(|value| (0.0..=100.0).contains(&value));
            (!in_range).then(|| format!("{field} must be a number between 0 and 100"))
        }
        FieldType::Decimal => {
            let valid = parse_numeric(raw).is_some_and(|value| value >= 0.0);
            (!valid).then(|| format!("{field} must be a non-negative number"))
        }
        FieldType::Role => TeacherRole::parse(raw).is_none().then(|| {
            let allowed: Vec<_> = TeacherRole::all().iter().map(TeacherRole::label).collect();
            format!("{field} must be one of: {}", allowed.join(", "))
        }),
        FieldType::PassFail => normalize_pass_fail(raw)
            .is_none()
            .then(|| format!("{field} must be Pass or Fail")),
    }
}

fn integer_message(field: &str, min: i64, max: Option<i64>) -> String {
    match max {
        Some(max) => format!("{field} must be between {min} and {max}"),
        None if min == 1 => format!("{field} must be a positive integer"),
        None => format!("{field} must be a whole number of at least {min}"),
    }
}
