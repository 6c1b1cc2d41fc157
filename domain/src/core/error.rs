//! Domain error types
//!
//! Every operation in this crate and the layers above it reports failure
//! through [`DomainError`]. The three variants are the complete taxonomy;
//! callers that need to branch on the class of failure without touching
//! the message use [`DomainError::kind`].

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced record does not exist, or a required set is empty.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller supplied malformed or missing input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The record store failed for reasons the domain does not classify.
    #[error("store failure: {0}")]
    StoreFailure(String),
}

/// Classification of a [`DomainError`], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    StoreFailure,
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument(message.into())
    }

    pub fn store_failure(message: impl Into<String>) -> Self {
        DomainError::StoreFailure(message.into())
    }

    /// The failure class, used by outer layers to pick a status code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            DomainError::StoreFailure(_) => ErrorKind::StoreFailure,
        }
    }
}
