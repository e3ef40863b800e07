//! Minimal OOXML spreadsheet (`.xlsx`) reader and writer.
//!
//! Covers what bulk roster files need: the first worksheet of a workbook,
//! shared and inline strings, numbers, booleans and error literals. Styles,
//! formulas and multi-sheet output are out of scope.
//!
//! # Example
//!
//! ```
//! use roster_xlsx::{CellValue, Sheet, read_first_sheet, write_sheet};
//!
//! let mut sheet = Sheet::new("student");
//! sheet.add_row(["First Name", "Grade"]);
//! sheet.add_row(vec![CellValue::text("Ada"), CellValue::number(8.0)]);
//!
//! let bytes = write_sheet(&sheet).unwrap();
//! let back = read_first_sheet(&bytes).unwrap();
//! assert_eq!(back.name, "student");
//! assert_eq!(back.rows[1].get(1), Some(&CellValue::Number(8.0)));
//! ```

pub mod error;
pub mod reader;
pub mod refs;
pub mod types;
pub mod writer;

pub use error::{Result, XlsxError};
pub use reader::{XlsxReader, read_first_sheet, read_xlsx};
pub use refs::{cell_reference, column_letters, parse_cell_reference};
pub use types::{CellValue, Sheet, SheetRow};
pub use writer::{MAX_SHEET_NAME_LEN, XlsxWriter, sanitize_sheet_name, write_sheet, write_xlsx};
