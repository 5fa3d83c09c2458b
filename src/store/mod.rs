//! # Store Interface
//!
//! Persistence contract for the resource handlers: find, list, insert,
//! replace, delete, with optimistic-concurrency detection on replace.
//!
//! The engine behind the contract is a deployment concern. This crate ships
//! [`MemoryStore`]; a relational backend would implement the same trait and
//! surface conflicts through the same error.

pub mod errors;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::model::Entity;

/// Substring filter over an entity's filter field.
///
/// Matching is case-insensitive for every entity type.
#[derive(Debug, Clone)]
pub struct Filter {
    needle: String,
}

impl Filter {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into().to_lowercase(),
        }
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Persistence operations for one entity type.
///
/// - Absence is `Ok(None)` from `find_by_id`, never an error.
/// - `list` ordering is store-defined and not guaranteed stable.
/// - `replace` fails with [`StoreError::ConcurrencyConflict`] when the
///   record's concurrency token no longer matches the stored row.
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    async fn find_by_id(&self, id: &E::Key) -> StoreResult<Option<E>>;

    async fn list(&self, filter: Option<&Filter>) -> StoreResult<Vec<E>>;

    /// Insert a record, assigning a generated key where the entity type uses
    /// one. Returns the stored record.
    async fn insert(&self, record: E) -> StoreResult<E>;

    async fn replace(&self, id: &E::Key, record: E) -> StoreResult<()>;

    async fn delete(&self, id: &E::Key) -> StoreResult<()>;
}
