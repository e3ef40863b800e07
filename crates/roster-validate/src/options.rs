//! Validation policy knobs.

use serde::{Deserialize, Serialize};

/// How an unrecognized gender cell is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPolicy {
    /// Anything other than M/Male/F/Female is a validation error.
    #[default]
    Strict,
    /// Unrecognized values are accepted and later normalized to `M`.
    Lenient,
}

impl std::str::FromStr for GenderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown gender policy '{other}' (expected strict or lenient)")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub gender_policy: GenderPolicy,
}

impl ValidationOptions {
    #[must_use]
    pub fn with_gender_policy(mut self, policy: GenderPolicy) -> Self {
        self.gender_policy = policy;
        self
    }
}
