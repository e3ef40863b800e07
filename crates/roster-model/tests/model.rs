//! Tests for roster-model types.

use chrono::NaiveDate;
use roster_model::{
    ClassRecord, DomainRecord, EntityKind, Gender, Student, ValidationError, ValidationResult,
};

fn student() -> Student {
    Student {
        student_id: "STU-001".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Banda".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2010, 5, 15).unwrap(),
        gender: Gender::F,
        grade_level: 8,
        stream: "A".to_string(),
        guardian_name: String::new(),
        guardian_phone: String::new(),
        guardian_email: String::new(),
        address: String::new(),
        medical_info: String::new(),
        enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
    }
}

#[test]
fn record_serializes_with_entity_tag() {
    let record = DomainRecord::Student(student());
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["entity"], "student");
    assert_eq!(json["date_of_birth"], "2010-05-15");
    assert_eq!(json["gender"], "F");

    let round: DomainRecord = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn class_record_round_trips_through_json() {
    let class = ClassRecord {
        class_name: "Grade 8A".to_string(),
        grade_level: 8,
        stream: "A".to_string(),
        capacity: 40,
        teacher_name: "J. Phiri".to_string(),
        subjects: vec!["Mathematics".to_string(), "English".to_string()],
        room_number: "B12".to_string(),
        schedule: String::new(),
    };
    let json = serde_json::to_string(&class).expect("serialize class");
    let round: ClassRecord = serde_json::from_str(&json).expect("deserialize class");
    assert_eq!(round, class);
    assert_eq!(DomainRecord::from(round).kind(), EntityKind::Class);
}

#[test]
fn validation_result_serializes_without_empty_options() {
    let result = ValidationResult::new(vec![ValidationError::required(3, "Date of Birth")], 1, 2);
    let json = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["field"], "Date of Birth");
    assert!(json["errors"][0].get("value").is_none());
}
