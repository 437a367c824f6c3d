//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (descriptor validation,
/// corrupt persisted payloads). Stores recover from these internally; none of
/// them reach presentation code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a row referencing an unknown column).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested resource was not found (e.g. unknown dataset id).
    #[error("not found")]
    NotFound,

    /// A persisted payload could not be understood.
    #[error("corrupt payload: {0}")]
    Corrupt(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }
}
