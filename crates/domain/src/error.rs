//! Unified error types for the domain layer
//!
//! Provides a common error type for all domain operations, enabling consistent
//! error handling without forcing callers to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Comment construction with an empty or whitespace-only message
    #[error("Comment cannot be created with an empty message")]
    EmptyMessage,

    /// Malformed author email address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Unacceptable attachment path
    #[error("Invalid file path: {0}")]
    InvalidFilePath(String),

    /// Residual validation failure (e.g., length caps)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates an invalid email error naming the defect.
    pub fn invalid_email(msg: impl Into<String>) -> Self {
        Self::InvalidEmail(msg.into())
    }

    /// Creates an invalid file path error naming the defect.
    pub fn invalid_file_path(msg: impl Into<String>) -> Self {
        Self::InvalidFilePath(msg.into())
    }

    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Values are outside allowed ranges
    /// - Length caps are exceeded
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
