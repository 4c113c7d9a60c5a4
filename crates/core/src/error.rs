//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is non-fatal: callers decide whether to surface it, log it, or
/// carry on. Catalog inputs are otherwise accepted as given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mutation targeted a key that is not in the catalog.
    #[error("item {0} not found")]
    NotFound(String),

    /// A structural invariant of the catalog was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn not_found(key: impl core::fmt::Display) -> Self {
        Self::NotFound(key.to_string())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_renders_key() {
        let err = DomainError::not_found(42);
        assert_eq!(err, DomainError::NotFound("42".to_string()));
        assert_eq!(err.to_string(), "item 42 not found");
    }
}
