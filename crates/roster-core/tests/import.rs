//! End-to-end import tests through real workbook bytes.

use chrono::NaiveDate;
use roster_core::{
    CoreError, GenderPolicy, ImportOptions, JsonSink, RecordSink, import, import_by_name,
    import_rows, records_from_json,
};
use roster_model::{ConfigurationError, DomainRecord, EntityKind, Gender, ModelError, RawRow};
use roster_xlsx::{CellValue, Sheet, write_sheet};

fn workbook(name: &str, rows: Vec<Vec<CellValue>>) -> Vec<u8> {
    let mut sheet = Sheet::new(name);
    for row in rows {
        sheet.add_row(row);
    }
    write_sheet(&sheet).unwrap()
}

fn text(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::text(*v)).collect()
}

fn options() -> ImportOptions {
    ImportOptions::default().with_today(NaiveDate::from_ymd_opt(2025, 1, 13).unwrap())
}

#[test]
fn test_three_row_student_sheet() {
    let bytes = workbook(
        "Students",
        vec![
            text(&["First Name", "Last Name", "Date of Birth", "Gender", "Grade"]),
            text(&["Ada", "Banda", "2010-05-15", "F", "8"]),
            text(&["Bwalya", "Phiri", "", "M", "9"]),
            text(&["Chipo", "Zulu", "2011-02-01", "F", "15"]),
        ],
    );
    let outcome = import(EntityKind::Student, &bytes, &options()).unwrap();

    assert_eq!(outcome.result.total_row_count, 3);
    assert_eq!(outcome.result.valid_row_count, 1);
    assert_eq!(outcome.records.len(), 1);
    assert!(!outcome.result.valid);
    assert!(outcome.result.has_error(3, "Date of Birth"));
    assert!(outcome.result.has_error(4, "Grade"));

    let student = outcome.records[0].as_student().unwrap();
    assert_eq!(student.first_name, "Ada");
    assert_eq!(student.enrollment_date.to_string(), "2025-01-13");
}

#[test]
fn test_serial_date_and_gender_spelling() {
    let bytes = workbook(
        "student",
        vec![
            text(&["First Name", "Last Name", "Date of Birth", "Gender", "Grade Level"]),
            vec![
                CellValue::text("Ada"),
                CellValue::text("Banda"),
                CellValue::number(40313.0),
                CellValue::text("male"),
                CellValue::number(8.0),
            ],
        ],
    );
    let outcome = import(EntityKind::Student, &bytes, &options()).unwrap();
    assert!(outcome.result.valid, "{:?}", outcome.result.errors);
    let student = outcome.records[0].as_student().unwrap();
    assert_eq!(student.date_of_birth.to_string(), "2010-05-15");
    assert_eq!(student.gender, Gender::M);
}

#[test]
fn test_gender_policy_controls_unknown_values() {
    let rows = vec![
        text(&["First Name", "Last Name", "Date of Birth", "Gender", "Grade"]),
        text(&["Ada", "Banda", "2010-05-15", "unknown", "8"]),
    ];
    let bytes = workbook("student", rows);

    let strict = import(EntityKind::Student, &bytes, &options()).unwrap();
    assert!(strict.result.has_error(2, "Gender"));
    assert!(strict.records.is_empty());

    let lenient = options().with_gender_policy(GenderPolicy::Lenient);
    let outcome = import(EntityKind::Student, &bytes, &lenient).unwrap();
    assert!(outcome.result.valid);
    assert_eq!(outcome.records[0].as_student().unwrap().gender, Gender::M);
}

#[test]
fn test_overlapping_grading_system() {
    let bytes = workbook(
        "grading_system",
        vec![
            text(&["Min Score", "Max Score", "Letter Grade", "Pass/Fail"]),
            text(&["0", "49", "F", "Fail"]),
            text(&["50", "59", "D", "Pass"]),
            text(&["55", "100", "C", "Pass"]),
        ],
    );
    let outcome = import(EntityKind::GradingSystem, &bytes, &options()).unwrap();
    assert!(!outcome.result.valid);
    assert!(outcome.result.errors.iter().any(|e| e.related_row == Some(3)));

    let err = outcome.into_grading_system("Secondary").unwrap_err();
    assert!(matches!(
        err,
        CoreError::Model(ModelError::OverlappingRanges { .. })
    ));
}

#[test]
fn test_grading_system_assembles() {
    let bytes = workbook(
        "grading_system",
        vec![
            text(&["Min Score", "Max Score", "Letter Grade", "Pass/Fail"]),
            text(&["50", "100", "p", "Pass"]),
            text(&["0", "50", "f", "Fail"]),
        ],
    );
    let outcome = import(EntityKind::GradingSystem, &bytes, &options()).unwrap();
    let system = outcome.into_grading_system("Primary").unwrap();
    let letters: Vec<_> = system.ranges().iter().map(|r| r.letter_grade.as_str()).collect();
    assert_eq!(letters, vec!["F", "P"]);
    assert_eq!(system.grade_for(72.0).map(|r| r.letter_grade.as_str()), Some("P"));
}

#[test]
fn test_blank_or_misspelled_pass_fail_blocks_range() {
    let range = |row: usize, pass_fail: &str| {
        RawRow::new(row)
            .with("Min Score", "0")
            .with("Max Score", "49")
            .with("Letter Grade", "F")
            .with("Pass/Fail", pass_fail)
    };
    let rows = vec![range(2, ""), range(3, "Fial")];
    let outcome = import_rows(EntityKind::GradingSystem, &rows, &options());

    assert!(!outcome.result.valid);
    assert!(outcome.result.has_error(2, "Pass/Fail"));
    assert!(outcome.result.has_error(3, "Pass/Fail"));
    assert_eq!(outcome.result.valid_row_count, 0);
    assert!(outcome.records.is_empty());
}

#[test]
fn test_into_grading_system_rejects_other_kinds() {
    let bytes = workbook("class", vec![text(&["Class Name", "Grade Level", "Capacity"])]);
    let outcome = import(EntityKind::Class, &bytes, &options()).unwrap();
    assert_eq!(outcome.result.total_row_count, 0);
    assert!(outcome.result.valid);
    assert!(matches!(
        outcome.into_grading_system("x"),
        Err(CoreError::WrongEntity { .. })
    ));
}

#[test]
fn test_structural_failures() {
    let err = import(EntityKind::Teacher, b"definitely not xlsx", &options()).unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)), "{err}");

    let err = import_by_name("parents", b"", &options()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Configuration(ConfigurationError::UnknownEntity { .. })
    ));
}

#[test]
fn test_json_sink_hands_off_records() {
    let bytes = workbook(
        "teacher",
        vec![
            text(&["First Name", "Last Name", "Email", "Role", "Gender"]),
            text(&["Grace", "Mwale", "grace@school.example", "Head Teacher", "F"]),
        ],
    );
    let outcome = import_by_name("teachers", &bytes, &options()).unwrap();

    let mut sink = JsonSink::new(Vec::new());
    let accepted = sink.accept(outcome.kind, &outcome.records).unwrap();
    assert_eq!(accepted, 1);

    let json = String::from_utf8(sink.into_inner()).unwrap();
    assert!(json.contains("\"entity\": \"teacher\""));
    assert_eq!(records_from_json(&json).unwrap(), outcome.records);

    let mut memory: Vec<DomainRecord> = Vec::new();
    memory.accept(outcome.kind, &outcome.records).unwrap();
    assert_eq!(memory, outcome.records);
}
