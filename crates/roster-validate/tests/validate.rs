//! Integration tests for schema-driven validation.

use proptest::prelude::*;
use roster_model::{EntityKind, RawRow};
use roster_schema::get_schema;
use roster_validate::{GenderPolicy, ValidationOptions, validate_rows};

fn grade_row(row: usize, min: &str, max: &str, letter: &str) -> RawRow {
    let pass_fail = if letter.eq_ignore_ascii_case("F") { "Fail" } else { "Pass" };
    RawRow::new(row)
        .with("Min Score", min)
        .with("Max Score", max)
        .with("Letter Grade", letter)
        .with("Pass/Fail", pass_fail)
}

fn validate(kind: EntityKind, rows: &[RawRow]) -> roster_validate::Validation {
    validate_rows(get_schema(kind), rows, &ValidationOptions::default())
}

#[test]
fn test_overlapping_grade_ranges() {
    let rows = vec![
        grade_row(2, "0", "49", "F"),
        grade_row(3, "50", "59", "D"),
        grade_row(4, "55", "100", "C"),
    ];
    let result = validate(EntityKind::GradingSystem, &rows);
    let overlaps: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.message.contains("overlaps"))
        .collect();
    assert!(!overlaps.is_empty());
    assert_eq!(overlaps[0].row, 4);
    assert_eq!(overlaps[0].related_row, Some(3));
}

#[test]
fn test_non_overlapping_grading_system_is_clean() {
    let rows = vec![
        grade_row(2, "80", "100", "a"),
        grade_row(3, "0", "49.99", "F"),
        grade_row(4, "50", "79.99", "B").with("Grade Point", "3.0"),
    ];
    let result = validate(EntityKind::GradingSystem, &rows);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.accepted, vec![0, 1, 2]);
}

#[test]
fn test_empty_first_name_rejects_row() {
    let rows = vec![
        RawRow::new(2)
            .with("First Name", "")
            .with("Last Name", "Banda")
            .with("Date of Birth", "2010-05-15")
            .with("Gender", "M")
            .with("Grade", "8"),
    ];
    let result = validate(EntityKind::Student, &rows);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "First Name");
    assert!(result.accepted.is_empty());
}

#[test]
fn test_grade_thirteen_rejects_otherwise_valid_row() {
    let rows = vec![
        RawRow::new(2)
            .with("First Name", "Ada")
            .with("Last Name", "Banda")
            .with("Date of Birth", "03/11/2009")
            .with("Gender", "female")
            .with("Grade Level", "13"),
    ];
    let result = validate(EntityKind::Student, &rows);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "Grade");
    assert_eq!(result.errors[0].value.as_deref(), Some("13"));
    assert!(result.accepted.is_empty());
}

#[test]
fn test_teacher_requires_valid_email_and_role() {
    let rows = vec![
        RawRow::new(2)
            .with("First Name", "Grace")
            .with("Last Name", "Mwale")
            .with("Email", "grace.at.school")
            .with("Role", "Principal")
            .with("Gender", "F"),
    ];
    let result = validate(EntityKind::Teacher, &rows);
    let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["Email", "Role"]);
    assert!(result.accepted.is_empty());
}

#[test]
fn test_lenient_gender_admits_row() {
    let rows = vec![
        RawRow::new(2)
            .with("First Name", "Grace")
            .with("Last Name", "Mwale")
            .with("Email", "grace@school.example")
            .with("Role", "Teacher")
            .with("Gender", "unspecified"),
    ];
    let options = ValidationOptions::default().with_gender_policy(GenderPolicy::Lenient);
    let result = validate_rows(get_schema(EntityKind::Teacher), &rows, &options);
    assert!(result.errors.is_empty());
    assert_eq!(result.accepted, vec![0]);
}

proptest! {
    #[test]
    fn prop_counts_are_consistent(grades in proptest::collection::vec("[0-9]{1,2}|[a-z]{0,3}", 0..30)) {
        let rows: Vec<RawRow> = grades
            .iter()
            .enumerate()
            .map(|(i, grade)| {
                RawRow::new(i + 2)
                    .with("Class Name", format!("C{i}"))
                    .with("Grade Level", grade.as_str())
                    .with("Capacity", "30")
            })
            .collect();
        let result = validate(EntityKind::Class, &rows);
        prop_assert_eq!(result.total, rows.len());
        prop_assert!(result.accepted.len() <= rows.len());
        for index in &result.accepted {
            let row = rows[*index].row;
            prop_assert!(!result.errors.iter().any(|e| e.row == row));
        }
        prop_assert_eq!(result.accepted.len() + result.errors.len(), rows.len());
    }
}
