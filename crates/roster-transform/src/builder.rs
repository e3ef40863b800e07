//! Record builders, one per entity kind.

use chrono::NaiveDate;
use roster_model::{
    ClassRecord, DomainRecord, EntityKind, GradeRange, RawRow, Student, Teacher, TeacherRole,
};
use roster_normalization::{
    normalize_gender, normalize_letter_grade, normalize_pass_fail, split_subjects,
};
use roster_schema::get_schema;
use tracing::trace;

use crate::cells::Cells;
use crate::error::{Result, TransformError};

/// Values the builder needs from outside the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildContext {
    /// Default for blank enrollment and joined dates.
    pub today: NaiveDate,
}

impl BuildContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Context dated with the local calendar day.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::today()
    }
}

/// Build the record for an accepted row.
pub fn build_record(kind: EntityKind, row: &RawRow, context: &BuildContext) -> Result<DomainRecord> {
    let cells = Cells::new(row, get_schema(kind));
    let record = match kind {
        EntityKind::Student => DomainRecord::Student(build_student(&cells, context)?),
        EntityKind::Class => DomainRecord::Class(build_class(&cells)?),
        EntityKind::Teacher => DomainRecord::Teacher(build_teacher(&cells, context)?),
        EntityKind::GradingSystem => DomainRecord::GradeRange(build_grade_range(&cells)?),
    };
    trace!(entity = %kind, row = row.row, "built record");
    Ok(record)
}

/// Build records for the given row indices, in order.
///
/// Returns the records and the failures for rows that could not be built.
pub fn build_records(
    kind: EntityKind,
    rows: &[RawRow],
    accepted: &[usize],
    context: &BuildContext,
) -> (Vec<DomainRecord>, Vec<TransformError>) {
    let mut records = Vec::with_capacity(accepted.len());
    let mut failures = Vec::new();
    for row in accepted.iter().filter_map(|index| rows.get(*index)) {
        match build_record(kind, row, context) {
            Ok(record) => records.push(record),
            Err(err) => failures.push(err),
        }
    }
    (records, failures)
}

fn build_student(cells: &Cells<'_>, context: &BuildContext) -> Result<Student> {
    Ok(Student {
        student_id: cells.text("student_id"),
        first_name: cells.required_text("first_name")?,
        last_name: cells.required_text("last_name")?,
        date_of_birth: cells.required_date("date_of_birth")?,
        gender: normalize_gender(cells.required("gender")?),
        grade_level: cells.required_integer("grade_level")?,
        stream: cells.text("stream"),
        guardian_name: cells.text("guardian_name"),
        guardian_phone: cells.text("guardian_phone"),
        guardian_email: cells.text("guardian_email"),
        address: cells.text("address"),
        medical_info: cells.text("medical_info"),
        enrollment_date: cells.date("enrollment_date").unwrap_or(context.today),
    })
}

fn build_class(cells: &Cells<'_>) -> Result<ClassRecord> {
    Ok(ClassRecord {
        class_name: cells.required_text("class_name")?,
        grade_level: cells.required_integer("grade_level")?,
        stream: cells.text("stream"),
        capacity: cells.required_integer("capacity")?,
        teacher_name: cells.text("teacher_name"),
        subjects: cells.raw("subjects").map(split_subjects).unwrap_or_default(),
        room_number: cells.text("room_number"),
        schedule: cells.text("schedule"),
    })
}

fn build_teacher(cells: &Cells<'_>, context: &BuildContext) -> Result<Teacher> {
    let role_raw = cells.required("role")?;
    let role = TeacherRole::parse(role_raw).ok_or_else(|| TransformError::InvalidValue {
        row: cells.row_number(),
        field: "Role",
        value: role_raw.to_string(),
    })?;

    Ok(Teacher {
        first_name: cells.required_text("first_name")?,
        last_name: cells.required_text("last_name")?,
        email: cells.required_text("email")?,
        phone: cells.text("phone"),
        role,
        ts_number: cells.text("ts_number"),
        nrc: cells.text("nrc"),
        date_of_birth: cells.date("date_of_birth"),
        gender: normalize_gender(cells.required("gender")?),
        address: cells.text("address"),
        qualifications: cells.text("qualifications"),
        joined_date: cells.date("joined_date").unwrap_or(context.today),
    })
}

fn build_grade_range(cells: &Cells<'_>) -> Result<GradeRange> {
    let pass_fail_raw = cells.required("pass_fail")?;
    let pass_fail =
        normalize_pass_fail(pass_fail_raw).ok_or_else(|| TransformError::InvalidValue {
            row: cells.row_number(),
            field: "Pass/Fail",
            value: pass_fail_raw.to_string(),
        })?;

    Ok(GradeRange {
        min_score: cells.required_number("min_score")?,
        max_score: cells.required_number("max_score")?,
        letter_grade: normalize_letter_grade(cells.required("letter_grade")?),
        grade_point: cells.number("grade_point"),
        description: cells.text("description"),
        pass_fail,
    })
}

#[cfg(test)]
mod tests {
    use roster_model::{Gender, PassFail};

    use super::*;

    fn context() -> BuildContext {
        BuildContext::new(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
    }

    #[test]
    fn test_student_defaults() {
        let row = RawRow::new(2)
            .with("First Name", " Ada ")
            .with("Last Name", "Banda")
            .with("Date of Birth", "40313")
            .with("Gender", "female")
            .with("Grade Level", "8");
        let record = build_record(EntityKind::Student, &row, &context()).unwrap();
        let student = record.as_student().unwrap();
        assert_eq!(student.first_name, "Ada");
        assert_eq!(student.date_of_birth.to_string(), "2010-05-15");
        assert_eq!(student.gender, Gender::F);
        assert_eq!(student.grade_level, 8);
        assert_eq!(student.stream, "");
        assert_eq!(student.enrollment_date, context().today);
    }

    #[test]
    fn test_class_subjects_split() {
        let row = RawRow::new(2)
            .with("Class Name", "8A")
            .with("Grade Level", "8")
            .with("Capacity", "40")
            .with("Subjects", "Mathematics, English,, Science ");
        let record = build_record(EntityKind::Class, &row, &context()).unwrap();
        assert_eq!(
            record.as_class().unwrap().subjects,
            vec!["Mathematics", "English", "Science"]
        );
    }

    #[test]
    fn test_teacher_optional_dob() {
        let row = RawRow::new(2)
            .with("First Name", "Grace")
            .with("Last Name", "Mwale")
            .with("Email", "grace@school.example")
            .with("Role", "head_of_department")
            .with("Gender", "F")
            .with("Date of Birth", "not a date")
            .with("Joined Date", "2019-01-07");
        let record = build_record(EntityKind::Teacher, &row, &context()).unwrap();
        let teacher = record.as_teacher().unwrap();
        assert_eq!(teacher.role, TeacherRole::HeadOfDepartment);
        assert_eq!(teacher.date_of_birth, None);
        assert_eq!(teacher.joined_date.to_string(), "2019-01-07");
    }

    #[test]
    fn test_grade_range_normalization() {
        let row = RawRow::new(2)
            .with("Min Score", "80")
            .with("Max Score", "100")
            .with("Letter Grade", "a+")
            .with("Grade Point", "4.0")
            .with("Pass/Fail", "pass");
        let record = build_record(EntityKind::GradingSystem, &row, &context()).unwrap();
        let range = record.as_grade_range().unwrap();
        assert_eq!(range.letter_grade, "A+");
        assert_eq!(range.grade_point, Some(4.0));
        assert_eq!(range.pass_fail, PassFail::Pass);
    }

    #[test]
    fn test_grade_range_requires_pass_fail() {
        let base = RawRow::new(4)
            .with("Min Score", "0")
            .with("Max Score", "49")
            .with("Letter Grade", "F");
        let err = build_record(EntityKind::GradingSystem, &base, &context()).unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingField {
                row: 4,
                field: "Pass/Fail"
            }
        );

        let misspelled = base.with("Pass/Fail", "Fial");
        let err = build_record(EntityKind::GradingSystem, &misspelled, &context()).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidValue {
                row: 4,
                field: "Pass/Fail",
                value: "Fial".to_string()
            }
        );
    }

    #[test]
    fn test_unvalidated_row_fails() {
        let row = RawRow::new(7).with("First Name", "Ada");
        let err = build_record(EntityKind::Student, &row, &context()).unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingField {
                row: 7,
                field: "Last Name"
            }
        );
        assert_eq!(err.to_validation_error().field, "Last Name");
    }

    #[test]
    fn test_build_records_skips_failures() {
        let rows = vec![
            RawRow::new(2).with("Class Name", "8A").with("Grade Level", "8").with("Capacity", "40"),
            RawRow::new(3).with("Class Name", "8B").with("Grade Level", "8").with("Capacity", "x"),
        ];
        let (records, failures) = build_records(EntityKind::Class, &rows, &[0, 1], &context());
        assert_eq!(records.len(), 1);
        assert_eq!(failures.len(), 1);
    }
}
