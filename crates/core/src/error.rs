//! Errors raised by catalog business rules.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic business failure. Nothing here is retryable: the same input
/// against the same state fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input rejected by a value object constructor or an operation guard.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Identifier with a malformed shape or check digit.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// More copies requested than are on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Operation not allowed in the aggregate's lifecycle state (e.g. deleted).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn insufficient_stock(requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_details() {
        assert_eq!(
            DomainError::validation("title cannot be empty").to_string(),
            "validation failed: title cannot be empty"
        );
        assert_eq!(
            DomainError::insufficient_stock(4, 3).to_string(),
            "insufficient stock: requested 4, available 3"
        );
        assert_eq!(DomainError::conflict("book is deleted").to_string(), "conflict: book is deleted");
    }
}
