//! Entity kinds supported by the bulk data engine.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// The closed set of record types that can be imported and exported.
///
/// Every stage of the pipeline dispatches on this enum, so adding a variant
/// forces each handler to be updated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Student,
    Class,
    Teacher,
    GradingSystem,
}

impl EntityKind {
    /// All entity kinds in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Student, Self::Class, Self::Teacher, Self::GradingSystem]
    }

    /// Machine name used for file names and sheet names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Class => "class",
            Self::Teacher => "teacher",
            Self::GradingSystem => "grading_system",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Students",
            Self::Class => "Classes",
            Self::Teacher => "Teachers",
            Self::GradingSystem => "Grading System",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "student" | "students" => Ok(Self::Student),
            "class" | "classes" => Ok(Self::Class),
            "teacher" | "teachers" => Ok(Self::Teacher),
            "grading_system" | "gradingsystem" | "grading" | "grades" => Ok(Self::GradingSystem),
            _ => Err(ConfigurationError::UnknownEntity {
                name: s.to_string(),
            }),
        }
    }
}
