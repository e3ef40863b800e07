//! Records to header-keyed rows: the inverse of the ingest mapping.

use roster_model::{ClassRecord, DomainRecord, GradeRange, RawRow, Student, Teacher};
use roster_normalization::{format_iso_date, format_number, join_subjects};

/// Header-keyed row for a record. `row` is the sheet row it will occupy.
pub fn record_to_row(record: &DomainRecord, row: usize) -> RawRow {
    let pairs = match record {
        DomainRecord::Student(student) => student_cells(student),
        DomainRecord::Class(class) => class_cells(class),
        DomainRecord::Teacher(teacher) => teacher_cells(teacher),
        DomainRecord::GradeRange(range) => grade_range_cells(range),
    };
    let mut raw = RawRow::new(row);
    for (header, value) in pairs {
        raw.insert(header, value);
    }
    raw
}

fn student_cells(s: &Student) -> Vec<(&'static str, String)> {
    vec![
        ("Student ID", s.student_id.clone()),
        ("First Name", s.first_name.clone()),
        ("Last Name", s.last_name.clone()),
        ("Date of Birth", format_iso_date(s.date_of_birth)),
        ("Gender", s.gender.as_str().to_string()),
        ("Grade", s.grade_level.to_string()),
        ("Stream", s.stream.clone()),
        ("Guardian Name", s.guardian_name.clone()),
        ("Guardian Phone", s.guardian_phone.clone()),
        ("Guardian Email", s.guardian_email.clone()),
        ("Address", s.address.clone()),
        ("Medical Info", s.medical_info.clone()),
        ("Enrollment Date", format_iso_date(s.enrollment_date)),
    ]
}

fn class_cells(c: &ClassRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Class Name", c.class_name.clone()),
        ("Grade Level", c.grade_level.to_string()),
        ("Stream", c.stream.clone()),
        ("Capacity", c.capacity.to_string()),
        ("Teacher Name", c.teacher_name.clone()),
        ("Subjects", join_subjects(&c.subjects)),
        ("Room Number", c.room_number.clone()),
        ("Schedule", c.schedule.clone()),
    ]
}

fn teacher_cells(t: &Teacher) -> Vec<(&'static str, String)> {
    vec![
        ("First Name", t.first_name.clone()),
        ("Last Name", t.last_name.clone()),
        ("Email", t.email.clone()),
        ("Phone", t.phone.clone()),
        ("Role", t.role.label().to_string()),
        ("TS Number", t.ts_number.clone()),
        ("NRC", t.nrc.clone()),
        (
            "Date of Birth",
            t.date_of_birth.map(format_iso_date).unwrap_or_default(),
        ),
        ("Gender", t.gender.as_str().to_string()),
        ("Address", t.address.clone()),
        ("Qualifications", t.qualifications.clone()),
        ("Joined Date", format_iso_date(t.joined_date)),
    ]
}

fn grade_range_cells(r: &GradeRange) -> Vec<(&'static str, String)> {
    vec![
        ("Min Score", format_number(r.min_score)),
        ("Max Score", format_number(r.max_score)),
        ("Letter Grade", r.letter_grade.clone()),
        (
            "Grade Point",
            r.grade_point.map(format_number).unwrap_or_default(),
        ),
        ("Description", r.description.clone()),
        ("Pass/Fail", r.pass_fail.as_str().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use roster_model::{EntityKind, PassFail};
    use roster_schema::get_schema;

    use super::*;

    #[test]
    fn test_grade_range_row_uses_schema_headers() {
        let record = DomainRecord::GradeRange(GradeRange {
            min_score: 0.0,
            max_score: 49.5,
            letter_grade: "F".to_string(),
            grade_point: None,
            description: "Fail".to_string(),
            pass_fail: PassFail::Fail,
        });
        let row = record_to_row(&record, 2);
        let schema = get_schema(EntityKind::GradingSystem);
        for header in schema.headers() {
            assert!(row.values.contains_key(header), "{header}");
        }
        assert_eq!(row.values.len(), schema.columns.len());
        assert_eq!(row.get("Max Score"), Some("49.5"));
        assert_eq!(row.get("Grade Point"), None);
        assert_eq!(row.get("Pass/Fail"), Some("Fail"));
    }
}
