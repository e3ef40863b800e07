//! Entity schema lookup.

use roster_model::{EntityKind, EntitySchema};

use crate::columns;
use crate::error::Result;

static STUDENT: EntitySchema = EntitySchema {
    kind: EntityKind::Student,
    columns: columns::STUDENT,
};

static CLASS: EntitySchema = EntitySchema {
    kind: EntityKind::Class,
    columns: columns::CLASS,
};

static TEACHER: EntitySchema = EntitySchema {
    kind: EntityKind::Teacher,
    columns: columns::TEACHER,
};

static GRADING_SYSTEM: EntitySchema = EntitySchema {
    kind: EntityKind::GradingSystem,
    columns: columns::GRADE_RANGE,
};

/// Schema for an entity kind.
pub fn get_schema(kind: EntityKind) -> &'static EntitySchema {
    match kind {
        EntityKind::Student => &STUDENT,
        EntityKind::Class => &CLASS,
        EntityKind::Teacher => &TEACHER,
        EntityKind::GradingSystem => &GRADING_SYSTEM,
    }
}

/// Schema for an entity type name such as `"student"` or `"grading-system"`.
///
/// # Errors
///
/// Returns [`crate::SchemaError::Configuration`] for an unknown name.
pub fn schema_by_name(name: &str) -> Result<&'static EntitySchema> {
    let kind: EntityKind = name.parse()?;
    Ok(get_schema(kind))
}

/// Every registered schema in display order.
pub fn all_schemas() -> impl Iterator<Item = &'static EntitySchema> {
    EntityKind::all().iter().map(|kind| get_schema(*kind))
}
