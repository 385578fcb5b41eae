//! Unified error types for the domain layer
//!
//! Provides a common error type for builder and prototype operations so callers
//! can match on the failure kind instead of parsing strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (e.g., empty section name, zero font size)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A prototype could not produce a copy of itself
    #[error("Clone failed: {0}")]
    CloneFailed(String),
}

impl DomainError {
    /// Creates an invalid argument error.
    ///
    /// Use this when a caller-supplied value violates a domain constraint.
    /// The operation that returns it must leave its receiver unchanged.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::invalid_argument("Section name cannot be empty"));
    /// }
    /// ```
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a clone failure error
    pub fn clone_failed(msg: impl Into<String>) -> Self {
        Self::CloneFailed(msg.into())
    }
}
