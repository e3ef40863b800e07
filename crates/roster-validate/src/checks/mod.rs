//! Individual validation checks.
//!
//! `field` covers single-cell checks driven by [`roster_model::FieldType`];
//! `grading` covers grade-range invariants that span a row or the whole sheet.

pub mod field;
pub mod grading;
