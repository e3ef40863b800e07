//! Integration tests for export and template workbooks.

use roster_ingest::read_table;
use roster_model::{ClassRecord, DomainRecord, EntityKind};
use roster_output::{ExportFile, template_file_name, write_records, write_template};
use roster_schema::get_schema;
use roster_validate::{ValidationOptions, validate_rows};

#[test]
fn test_templates_validate_cleanly() {
    for kind in EntityKind::all() {
        let bytes = write_template(*kind).unwrap();
        let table = read_table(&bytes).unwrap();
        assert_eq!(table.sheet_name, kind.as_str());
        assert_eq!(table.headers, get_schema(*kind).headers());
        assert_eq!(table.rows.len(), 1);

        let result = validate_rows(get_schema(*kind), &table.rows, &ValidationOptions::default());
        assert!(result.errors.is_empty(), "{kind}: {:?}", result.errors);
        assert_eq!(result.accepted, vec![0]);
    }
}

#[test]
fn test_export_reads_back_as_rows() {
    let records = vec![DomainRecord::Class(ClassRecord {
        class_name: "Grade 9B".to_string(),
        grade_level: 9,
        stream: "B".to_string(),
        capacity: 35,
        teacher_name: String::new(),
        subjects: vec!["Biology".to_string(), "Chemistry".to_string()],
        room_number: "Lab 2".to_string(),
        schedule: String::new(),
    })];
    let table = read_table(&write_records(EntityKind::Class, &records).unwrap()).unwrap();
    let row = &table.rows[0];
    assert_eq!(row.row, 2);
    assert_eq!(row.get("Class Name"), Some("Grade 9B"));
    assert_eq!(row.get("Capacity"), Some("35"));
    assert_eq!(row.get("Subjects"), Some("Biology, Chemistry"));
    assert_eq!(row.get("Teacher Name"), None);
}

#[test]
fn test_write_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports");
    let file = ExportFile::new(
        template_file_name(EntityKind::Teacher),
        write_template(EntityKind::Teacher).unwrap(),
    );
    let path = file.write_to(&nested).unwrap();
    assert_eq!(path, nested.join("teacher_import_template.xlsx"));
    assert_eq!(std::fs::read(path).unwrap(), file.bytes);
}
