//! Column definitions per entity.
//!
//! Header labels are part of the external contract: templates, exports and
//! user-prepared sheets all depend on them verbatim.

use roster_model::{ColumnSchema, FieldType};

const GRADE_LEVEL: FieldType = FieldType::Integer {
    min: 1,
    max: Some(12),
};

const CAPACITY: FieldType = FieldType::Integer { min: 1, max: None };

pub(crate) const STUDENT: &[ColumnSchema] = &[
    ColumnSchema::optional("Student ID", "student_id", FieldType::Text),
    ColumnSchema::required("First Name", "first_name", FieldType::Text),
    ColumnSchema::required("Last Name", "last_name", FieldType::Text),
    ColumnSchema::required("Date of Birth", "date_of_birth", FieldType::Date),
    ColumnSchema::required("Gender", "gender", FieldType::Gender),
    ColumnSchema::required("Grade", "grade_level", GRADE_LEVEL).with_aliases(&["Grade Level"]),
    ColumnSchema::optional("Stream", "stream", FieldType::Text),
    ColumnSchema::optional("Guardian Name", "guardian_name", FieldType::Text),
    ColumnSchema::optional("Guardian Phone", "guardian_phone", FieldType::Text),
    ColumnSchema::optional("Guardian Email", "guardian_email", FieldType::Email),
    ColumnSchema::optional("Address", "address", FieldType::Text),
    ColumnSchema::optional("Medical Info", "medical_info", FieldType::Text),
    ColumnSchema::optional("Enrollment Date", "enrollment_date", FieldType::Date),
];

pub(crate) const CLASS: &[ColumnSchema] = &[
    ColumnSchema::required("Class Name", "class_name", FieldType::Text),
    ColumnSchema::required("Grade Level", "grade_level", GRADE_LEVEL).with_aliases(&["Grade"]),
    ColumnSchema::optional("Stream", "stream", FieldType::Text),
    ColumnSchema::required("Capacity", "capacity", CAPACITY),
    ColumnSchema::optional("Teacher Name", "teacher_name", FieldType::Text),
    ColumnSchema::optional("Subjects", "subjects", FieldType::List),
    ColumnSchema::optional("Room Number", "room_number", FieldType::Text),
    ColumnSchema::optional("Schedule", "schedule", FieldType::Text),
];

pub(crate) const TEACHER: &[ColumnSchema] = &[
    ColumnSchema::required("First Name", "first_name", FieldType::Text),
    ColumnSchema::required("Last Name", "last_name", FieldType::Text),
    ColumnSchema::required("Email", "email", FieldType::Email),
    ColumnSchema::optional("Phone", "phone", FieldType::Text),
    ColumnSchema::required("Role", "role", FieldType::Role),
    ColumnSchema::optional("TS Number", "ts_number", FieldType::Text),
    ColumnSchema::optional("NRC", "nrc", FieldType::Text),
    ColumnSchema::optional("Date of Birth", "date_of_birth", FieldType::Date),
    ColumnSchema::required("Gender", "gender", FieldType::Gender),
    ColumnSchema::optional("Address", "address", FieldType::Text),
    ColumnSchema::optional("Qualifications", "qualifications", FieldType::Text),
    ColumnSchema::optional("Joined Date", "joined_date", FieldType::Date),
];

pub(crate) const GRADE_RANGE: &[ColumnSchema] = &[
    ColumnSchema::required("Min Score", "min_score", FieldType::Score),
    ColumnSchema::required("Max Score", "max_score", FieldType::Score),
    ColumnSchema::required("Letter Grade", "letter_grade", FieldType::LetterGrade),
    ColumnSchema::optional("Grade Point", "grade_point", FieldType::Decimal),
    ColumnSchema::optional("Description", "description", FieldType::Text),
    ColumnSchema::required("Pass/Fail", "pass_fail", FieldType::PassFail),
];
