//! Data model types for the Roster Studio bulk data engine.
//!
//! This crate provides the type-safe vocabulary shared by every stage of the
//! import/export pipeline:
//! - **Entities**: the closed set of importable record kinds
//! - **Schemas**: declarative column-to-field mappings per entity
//! - **Rows**: unvalidated spreadsheet rows addressed by source row number
//! - **Diagnostics**: per-row validation errors and the aggregate result
//! - **Records**: validated, normalized domain records
//!
//! # Module Organization
//!
//! - [`entity`]: [`EntityKind`] and its parsing rules
//! - [`schema`]: [`ColumnSchema`], [`EntitySchema`], [`FieldType`]
//! - [`row`]: [`RawRow`]
//! - [`validation`]: [`ValidationError`], [`ValidationResult`]
//! - [`records`]: [`Student`], [`ClassRecord`], [`Teacher`], [`GradeRange`]
//! - [`grading`]: [`GradingSystem`]

pub mod entity;
pub mod error;
pub mod grading;
pub mod records;
pub mod row;
pub mod schema;
pub mod validation;

pub use entity::EntityKind;
pub use error::{ConfigurationError, ModelError};
pub use grading::GradingSystem;
pub use records::{
    ClassRecord, DomainRecord, Gender, GradeRange, PassFail, Student, Teacher, TeacherRole,
};
pub use row::RawRow;
pub use schema::{ColumnSchema, EntitySchema, FieldType};
pub use validation::{ValidationError, ValidationResult};
