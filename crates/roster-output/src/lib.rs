//! Roster output generation.
//!
//! - **Writer**: typed records back to a header-keyed workbook, one sheet
//!   named for the entity type.
//! - **Templates**: a fixed example row per entity so every column is shown.
//! - **Naming**: `<entitytype>_<ISODate>.xlsx` exports and
//!   `<entitytype>_import_template.xlsx` templates.

mod error;
mod naming;
mod rows;
mod template;
mod workbook;

pub use error::{OutputError, Result};
pub use naming::{ExportFile, export_file_name, template_file_name};
pub use rows::record_to_row;
pub use template::{template_row, write_template};
pub use workbook::{write_records, write_rows};
