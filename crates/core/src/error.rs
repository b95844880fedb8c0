//! Error types for the forum domain layer.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`DomainError`] - Business logic and authorization errors
//! - [`StorageError`] - Fixture store errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Denial-class errors (unauthenticated, not a member, not found,
//! duplicate name) are deliberately *not* surfaced on the GraphQL error
//! channel: the API layer converts them to null results, matching the
//! convention of the exposed schema. [`DomainError::is_denial`] is the
//! single classification point for that policy.

use thiserror::Error;

// =============================================================================
// Storage Errors
// =============================================================================

/// Fixture store errors.
///
/// These errors originate from store operations: lock acquisition and
/// fixture decoding. The store is in-memory, so there is no connection
/// or query failure class.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A store lock was poisoned by a panicking writer.
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),

    /// Fixture data failed to deserialize.
    #[error("Fixture error: {0}")]
    SerializationError(String),

    /// Requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),
}

// =============================================================================
// Domain Errors
// =============================================================================

/// Business logic and authorization rule violations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No resolved actor identity was supplied with the request.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Actor is not a member of the target forum.
    #[error("Not a member of forum {0}")]
    NotMember(String),

    /// Actor may not access the requested resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Referenced forum does not exist.
    #[error("Forum not found: {0}")]
    ForumNotFound(String),

    /// Referenced user does not exist.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A forum with this name already exists.
    #[error("Forum name already taken: {0}")]
    DuplicateForumName(String),

    /// Malformed or out-of-range input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DomainError {
    /// Whether this error is surfaced as a null result instead of a
    /// field error.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            DomainError::Unauthenticated
                | DomainError::NotMember(_)
                | DomainError::Forbidden(_)
                | DomainError::ForumNotFound(_)
                | DomainError::UserNotFound(_)
                | DomainError::DuplicateForumName(_)
        )
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
