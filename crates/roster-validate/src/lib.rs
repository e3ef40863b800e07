//! Roster row validation.
//!
//! Applies an [`roster_model::EntitySchema`] to raw rows and accumulates
//! [`roster_model::ValidationError`]s. Row-level problems are never fatal:
//! validation always completes and reports which rows may be built.

pub mod checks;
mod options;
mod validator;

pub use options::{GenderPolicy, ValidationOptions};
pub use validator::{Validation, validate_rows};
