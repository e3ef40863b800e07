use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use roster_model::{FieldType, ValidationError};

use crate::types::ImportReport;

/// Errors shown before the list is cut off.
pub const ERROR_PREVIEW_LIMIT: usize = 20;

pub fn print_import_summary(report: &ImportReport, all_errors: bool) {
    println!("Source: {}", report.source.display());
    if let Some(path) = &report.json_output {
        println!("Records: {}", path.display());
    }
    if let Some(system) = &report.grading_system {
        println!("Grading system: {} ({} bands)", system.name, system.bands);
    }

    let result = &report.result;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Rows"),
        header_cell("Imported"),
        header_cell("Rejected"),
        header_cell("Errors"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 5, CellAlignment::Center);
    table.add_row(vec![
        Cell::new(report.kind.label())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_row_count),
        Cell::new(result.valid_row_count).add_attribute(Attribute::Bold),
        count_cell(result.rejected_row_count(), Color::Yellow),
        count_cell(result.errors.len(), Color::Red),
        status_cell(result.valid),
    ]);
    println!("{table}");

    if !result.errors.is_empty() {
        print_error_table(&result.errors, all_errors);
    }
}

fn print_error_table(errors: &[ValidationError], all_errors: bool) {
    let (shown, hidden) = preview(errors, all_errors);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in shown {
        let row = match error.related_row {
            Some(related) => format!("{} (vs {related})", error.row),
            None => error.row.to_string(),
        };
        table.add_row(vec![
            Cell::new(row),
            Cell::new(&error.field).fg(Color::Yellow),
            Cell::new(&error.message),
            error
                .value
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
    if hidden > 0 {
        println!("+{hidden} more (use --all-errors to show every error)");
    }
}

/// The errors to print and how many were left out.
pub fn preview(errors: &[ValidationError], all: bool) -> (&[ValidationError], usize) {
    if all || errors.len() <= ERROR_PREVIEW_LIMIT {
        (errors, 0)
    } else {
        (
            &errors[..ERROR_PREVIEW_LIMIT],
            errors.len() - ERROR_PREVIEW_LIMIT,
        )
    }
}

pub fn field_type_label(field_type: FieldType) -> String {
    match field_type {
        FieldType::Text => "text".to_string(),
        FieldType::Date => "date".to_string(),
        FieldType::Gender => "gender (M/F)".to_string(),
        FieldType::Email => "email".to_string(),
        FieldType::Integer { min, max: Some(max) } => format!("integer {min}-{max}"),
        FieldType::Integer { min, max: None } => format!("integer >= {min}"),
        FieldType::Score => "score 0-100".to_string(),
        FieldType::Decimal => "number".to_string(),
        FieldType::Role => "role".to_string(),
        FieldType::PassFail => "Pass/Fail".to_string(),
        FieldType::LetterGrade => "letter grade".to_string(),
        FieldType::List => "comma list".to_string(),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("valid")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("errors")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(count: usize) -> Vec<ValidationError> {
        (0..count)
            .map(|index| ValidationError::required(index + 2, "First Name"))
            .collect()
    }

    #[test]
    fn test_preview_truncates() {
        let errors = errors(25);
        let (shown, hidden) = preview(&errors, false);
        assert_eq!(shown.len(), ERROR_PREVIEW_LIMIT);
        assert_eq!(hidden, 5);
        assert_eq!(preview(&errors, true).1, 0);
    }

    #[test]
    fn test_preview_short_list_untouched() {
        let errors = errors(3);
        assert_eq!(preview(&errors, false), (errors.as_slice(), 0));
    }

    #[test]
    fn test_field_type_labels() {
        assert_eq!(
            field_type_label(FieldType::Integer {
                min: 1,
                max: Some(12)
            }),
            "integer 1-12"
        );
        assert_eq!(
            field_type_label(FieldType::Integer { min: 1, max: None }),
            "integer >= 1"
        );
    }
}
