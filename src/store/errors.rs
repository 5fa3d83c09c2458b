//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by a store backend.
///
/// Concurrency conflicts are distinguishable from absence and from generic
/// backend faults; the resource layer relies on that distinction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record at the identifier
    #[error("record not found")]
    NotFound,

    /// Caller-supplied key already exists
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// Row was modified by another writer between read and write
    #[error("concurrent modification detected")]
    ConcurrencyConflict,

    /// Anything unclassified: connectivity, constraint violations, corruption
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
