//! Error types for schema lookups.

use roster_model::ConfigurationError;
use thiserror::Error;

/// Errors returned by the schema registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The requested entity type is not registered.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Result type for schema lookups.
pub type Result<T> = std::result::Result<T, SchemaError>;
