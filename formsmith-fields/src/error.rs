//! Error types for the field registry

use thiserror::Error;

/// Result type for field registry operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur when building a field registry.
///
/// Lookups never error; a missing field or attribute resolves to `None` or a
/// default. The only hard failures are malformed definition input.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Two descriptors declared under the same field name
    #[error("duplicate field name: {name}")]
    DuplicateField { name: String },

    /// YAML definition did not parse
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
