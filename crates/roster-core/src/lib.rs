//! Roster import and export orchestration.
//!
//! ```text
//! bytes ─▶ ingest ─▶ validate ─▶ transform ─▶ ImportOutcome { result, records }
//! records ─▶ output ─▶ ExportFile { file_name, bytes }
//! ```
//!
//! Every call is synchronous and self-contained: nothing is shared between
//! calls, and a caller only ever sees a complete outcome.
//!
//! # Example
//!
//! ```no_run
//! use roster_core::{ImportOptions, import};
//! use roster_model::EntityKind;
//!
//! let bytes = std::fs::read("students.xlsx").unwrap();
//! let outcome = import(EntityKind::Student, &bytes, &ImportOptions::default()).unwrap();
//! println!(
//!     "{} of {} rows imported",
//!     outcome.result.valid_row_count, outcome.result.total_row_count
//! );
//! ```

mod error;
mod export;
mod import;
mod options;
mod sink;

pub use error::{CoreError, Result};
pub use export::{export, export_grading_system, template};
pub use import::{ImportOutcome, import, import_by_name, import_rows};
pub use options::{ExportOptions, ImportOptions};
pub use roster_output::ExportFile;
pub use roster_validate::GenderPolicy;
pub use sink::{JsonSink, RecordSink, records_from_json};
