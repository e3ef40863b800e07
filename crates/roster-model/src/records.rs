//! Validated domain records.
//!
//! Records are immutable once built. Optional text fields hold an empty
//! string rather than `None` so downstream consumers need no null handling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// Canonical gender code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }

    /// Strict parse: `M`, `Male`, `F`, `Female`, any case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Some(Self::M),
            "f" | "female" => Some(Self::F),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff role assigned to a teacher account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeacherRole {
    Teacher,
    HeadTeacher,
    DeputyHeadTeacher,
    HeadOfDepartment,
    SeniorTeacher,
    Administrator,
}

impl TeacherRole {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Teacher,
            Self::HeadTeacher,
            Self::DeputyHeadTeacher,
            Self::HeadOfDepartment,
            Self::SeniorTeacher,
            Self::Administrator,
        ]
    }

    /// Snake-case code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::HeadTeacher => "head_teacher",
            Self::DeputyHeadTeacher => "deputy_head_teacher",
            Self::HeadOfDepartment => "head_of_department",
            Self::SeniorTeacher => "senior_teacher",
            Self::Administrator => "administrator",
        }
    }

    /// Label as written in spreadsheets.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Teacher => "Teacher",
            Self::HeadTeacher => "Head Teacher",
            Self::DeputyHeadTeacher => "Deputy Head Teacher",
            Self::HeadOfDepartment => "Head of Department",
            Self::SeniorTeacher => "Senior Teacher",
            Self::Administrator => "Administrator",
        }
    }

    /// Case-insensitive match on label or code.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::all().iter().copied().find(|role| {
            role.label().eq_ignore_ascii_case(needle) || role.code().eq_ignore_ascii_case(needle)
        })
    }
}

impl std::fmt::Display for TeacherRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome attached to a grade band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassFail {
    Pass,
    Fail,
}

impl PassFail {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pass" | "p" => Some(Self::Pass),
            "fail" | "f" => Some(Self::Fail),
            _ => None,
        }
    }
}

impl std::fmt::Display for PassFail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub grade_level: u8,
    pub stream: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub address: String,
    pub medical_info: String,
    pub enrollment_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub class_name: String,
    pub grade_level: u8,
    pub stream: String,
    pub capacity: u32,
    pub teacher_name: String,
    pub subjects: Vec<String>,
    pub room_number: String,
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: TeacherRole,
    pub ts_number: String,
    pub nrc: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub address: String,
    pub qualifications: String,
    pub joined_date: NaiveDate,
}

/// One band of a grading system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRange {
    pub min_score: f64,
    pub max_score: f64,
    pub letter_grade: String,
    pub grade_point: Option<f64>,
    pub description: String,
    pub pass_fail: PassFail,
}

impl GradeRange {
    /// Whether `score` falls inside this band (inclusive at both ends).
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min_score && score <= self.max_score
    }
}

/// A validated record of any entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum DomainRecord {
    Student(Student),
    Class(ClassRecord),
    Teacher(Teacher),
    GradeRange(GradeRange),
}

impl DomainRecord {
    /// Entity kind this record belongs to.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Student(_) => EntityKind::Student,
            Self::Class(_) => EntityKind::Class,
            Self::Teacher(_) => EntityKind::Teacher,
            Self::GradeRange(_) => EntityKind::GradingSystem,
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Self::Student(student) => Some(student),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassRecord> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&Teacher> {
        match self {
            Self::Teacher(teacher) => Some(teacher),
            _ => None,
        }
    }

    pub fn as_grade_range(&self) -> Option<&GradeRange> {
        match self {
            Self::GradeRange(range) => Some(range),
            _ => None,
        }
    }
}

impl From<Student> for DomainRecord {
    fn from(value: Student) -> Self {
        Self::Student(value)
    }
}

impl From<ClassRecord> for DomainRecord {
    fn from(value: ClassRecord) -> Self {
        Self::Class(value)
    }
}

impl From<Teacher> for DomainRecord {
    fn from(value: Teacher) -> Self {
        Self::Teacher(value)
    }
}

impl From<GradeRange> for DomainRecord {
    fn from(value: GradeRange) -> Self {
        Self::GradeRange(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("male"), Some(Gender::M));
        assert_eq!(Gender::parse(" F "), Some(Gender::F));
        assert_eq!(Gender::parse("FEMALE"), Some(Gender::F));
        assert_eq!(Gender::parse("x"), None);
    }

    #[test]
    fn test_role_parse_label_and_code() {
        assert_eq!(TeacherRole::parse("head teacher"), Some(TeacherRole::HeadTeacher));
        assert_eq!(
            TeacherRole::parse("HEAD_OF_DEPARTMENT"),
            Some(TeacherRole::HeadOfDepartment)
        );
        assert_eq!(TeacherRole::parse("janitor"), None);
    }

    #[test]
    fn test_pass_fail_parse() {
        assert_eq!(PassFail::parse("PASS"), Some(PassFail::Pass));
        assert_eq!(PassFail::parse("f"), Some(PassFail::Fail));
        assert_eq!(PassFail::parse("maybe"), None);
    }

    #[test]
    fn test_record_kind() {
        let range = GradeRange {
            min_score: 0.0,
            max_score: 49.0,
            letter_grade: "F".to_string(),
            grade_point: None,
            description: String::new(),
            pass_fail: PassFail::Fail,
        };
        let record = DomainRecord::from(range);
        assert_eq!(record.kind(), EntityKind::GradingSystem);
        assert!(record.as_grade_range().is_some());
        assert!(record.as_student().is_none());
    }
}
