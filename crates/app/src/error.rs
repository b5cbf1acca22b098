//! Application-level error model.

use thiserror::Error;

use catalog_core::DomainError;
use catalog_events::{DispatchFailedError, UnitOfWorkError};

/// Result type used across the application layer.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error.
///
/// Domain failures are mapped onto deterministic variants; pipeline and
/// persistence failures keep their typed cause.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input or domain validation failure (deterministic).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A conflict occurred (e.g. a transition that is already done).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,

    /// Domain event dispatch failed after the handler ran.
    #[error(transparent)]
    Dispatch(#[from] DispatchFailedError),

    /// Persisting the unit of work failed.
    #[error(transparent)]
    Commit(#[from] UnitOfWorkError),

    /// Unexpected infrastructure failure (e.g. a poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<DomainError> for AppError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::InvariantViolation(msg) => AppError::InvariantViolation(msg),
            DomainError::InvalidId(msg) => AppError::Validation(msg),
            DomainError::NotFound => AppError::NotFound,
            DomainError::Conflict(msg) => AppError::Conflict(msg),
        }
    }
}
