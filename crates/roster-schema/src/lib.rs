//! Static column schema registry.
//!
//! Every importable entity has exactly one [`EntitySchema`], defined as an
//! immutable constant and available from process start. Lookups never
//! allocate and the registry is never mutated.
//!
//! # Example
//!
//! ```
//! use roster_model::EntityKind;
//! use roster_schema::{get_schema, schema_by_name};
//!
//! let students = get_schema(EntityKind::Student);
//! assert_eq!(students.columns[1].header, "First Name");
//!
//! assert!(schema_by_name("parents").is_err());
//! ```

mod columns;
mod error;
mod registry;

pub use error::{Result, SchemaError};
pub use registry::{all_schemas, get_schema, schema_by_name};
