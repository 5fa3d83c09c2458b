//! In-memory store.
//!
//! Backs the resource handlers with a `RwLock<HashMap>` keyed by entity id.
//! Each row carries an integer version as its concurrency token: set to 1 on
//! insert, bumped on every replace, compared before any write when the
//! incoming record presents a token. A production deployment would put a
//! relational backend behind the same [`Store`] trait.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::{Filter, Store};
use crate::model::{Entity, EntityKey};

pub struct MemoryStore<E: Entity> {
    rows: RwLock<HashMap<E::Key, E>>,
    seq: AtomicI64,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            seq: AtomicI64::new(0),
        }
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn find_by_id(&self, id: &E::Key) -> StoreResult<Option<E>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(rows.get(id).cloned())
    }

    async fn list(&self, filter: Option<&Filter>) -> StoreResult<Vec<E>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(rows
            .values()
            .filter(|record| filter.map_or(true, |f| f.matches(record.filter_field())))
            .cloned()
            .collect())
    }

    async fn insert(&self, record: E) -> StoreResult<E> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let key = if E::GENERATED_KEY {
            let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
            E::Key::from_seq(seq)
                .ok_or_else(|| StoreError::backend("key type does not support generation"))?
        } else {
            record
                .key()
                .ok_or_else(|| StoreError::backend("missing caller-supplied key"))?
        };

        if rows.contains_key(&key) {
            return Err(StoreError::DuplicateKey(key.to_string()));
        }

        let mut record = record;
        record.set_key(key.clone());
        record.set_row_version(1);
        rows.insert(key, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: &E::Key, record: E) -> StoreResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let current_version = match rows.get(id) {
            Some(current) => current.row_version(),
            None => return Err(StoreError::NotFound),
        };

        // A zero token means the writer presented nothing to compare.
        if record.row_version() != 0 && record.row_version() != current_version {
            return Err(StoreError::ConcurrencyConflict);
        }

        let mut record = record;
        record.set_key(id.clone());
        record.set_row_version(current_version + 1);
        rows.insert(id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &E::Key) -> StoreResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        rows.remove(id).ok_or(StoreError::NotFound)?;
        Ok(())
    }
}
