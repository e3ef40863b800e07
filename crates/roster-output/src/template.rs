//! Import templates: one fixed, fully populated example row per entity.

use roster_model::{EntityKind, RawRow};
use roster_schema::get_schema;

use crate::error::Result;
use crate::workbook::write_rows;

const STUDENT_EXAMPLE: &[(&str, &str)] = &[
    ("Student ID", "STU-0001"),
    ("First Name", "Chanda"),
    ("Last Name", "Mulenga"),
    ("Date of Birth", "2012-03-14"),
    ("Gender", "F"),
    ("Grade", "7"),
    ("Stream", "A"),
    ("Guardian Name", "Mary Mulenga"),
    ("Guardian Phone", "+260 977 123456"),
    ("Guardian Email", "mary.mulenga@example.com"),
    ("Address", "Plot 12, Kabulonga Road, Lusaka"),
    ("Medical Info", "Asthma - carries inhaler"),
    ("Enrollment Date", "2024-01-08"),
];

const CLASS_EXAMPLE: &[(&str, &str)] = &[
    ("Class Name", "Grade 7A"),
    ("Grade Level", "7"),
    ("Stream", "A"),
    ("Capacity", "40"),
    ("Teacher Name", "John Banda"),
    ("Subjects", "Mathematics, English, Science, Social Studies"),
    ("Room Number", "B12"),
    ("Schedule", "Mon-Fri 07:30-13:00"),
];

const TEACHER_EXAMPLE: &[(&str, &str)] = &[
    ("First Name", "John"),
    ("Last Name", "Banda"),
    ("Email", "john.banda@example.com"),
    ("Phone", "+260 966 654321"),
    ("Role", "Teacher"),
    ("TS Number", "TS-204518"),
    ("NRC", "123456/10/1"),
    ("Date of Birth", "1985-07-22"),
    ("Gender", "M"),
    ("Address", "House 4, Chelston, Lusaka"),
    ("Qualifications", "B.Ed Mathematics"),
    ("Joined Date", "2015-01-12"),
];

const GRADE_RANGE_EXAMPLE: &[(&str, &str)] = &[
    ("Min Score", "75"),
    ("Max Score", "100"),
    ("Letter Grade", "A"),
    ("Grade Point", "4"),
    ("Description", "Distinction"),
    ("Pass/Fail", "Pass"),
];

/// The example row shown in an entity's import template.
pub fn template_row(kind: EntityKind) -> RawRow {
    let pairs = match kind {
        EntityKind::Student => STUDENT_EXAMPLE,
        EntityKind::Class => CLASS_EXAMPLE,
        EntityKind::Teacher => TEACHER_EXAMPLE,
        EntityKind::GradingSystem => GRADE_RANGE_EXAMPLE,
    };
    pairs
        .iter()
        .fold(RawRow::new(2), |row, (header, value)| row.with(*header, *value))
}

/// Template workbook bytes: headers plus the example row.
pub fn write_template(kind: EntityKind) -> Result<Vec<u8>> {
    write_rows(get_schema(kind), &[template_row(kind)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_column_populated() {
        for kind in EntityKind::all() {
            let row = template_row(*kind);
            let schema = get_schema(*kind);
            for column in schema.columns {
                assert!(
                    row.value_for(column).is_some(),
                    "{kind} template is missing {}",
                    column.header
                );
            }
            assert_eq!(row.values.len(), schema.columns.len(), "{kind}");
        }
    }
}
