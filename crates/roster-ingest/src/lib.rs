//! Roster ingestion.
//!
//! Reads the first sheet of an uploaded workbook and maps every data row to
//! a [`roster_model::RawRow`] keyed by header label. No validation happens
//! here; a row is only dropped when all of its cells are blank.

mod error;
mod table;

pub use error::{IngestError, ParseError, Result};
pub use table::{SheetTable, read_rows, read_table, read_table_from_path, table_from_sheet};
