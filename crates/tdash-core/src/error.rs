//! Centralized error types for tdash.

use thiserror::Error;

/// Main error type for tdash operations.
#[derive(Error, Debug)]
pub enum DashError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },

    #[error("No {kind} id left after {max}")]
    IdsExhausted { kind: &'static str, max: u64 },

    #[error("Schema violation in {kind} {id}: {reason}")]
    SchemaViolation {
        kind: &'static str,
        id: u64,
        reason: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for tdash operations.
pub type DashResult<T> = Result<T, DashError>;

impl DashError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a schema violation for a record.
    pub fn schema(kind: &'static str, id: u64, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            kind,
            id,
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
