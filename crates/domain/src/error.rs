//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a required field is blank)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Duplicate key in a snapshot that requires unique keys
    #[error("Duplicate activity name: {0}")]
    DuplicateActivity(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a duplicate activity error
    pub fn duplicate_activity(name: impl Into<String>) -> Self {
        Self::DuplicateActivity(name.into())
    }
}
