//! # Resource Handler
//!
//! The six standard operations over one entity type, generic over the
//! [`Entity`] descriptor and the [`Store`] backend. One instantiation per
//! entity type replaces the duplicated per-entity controllers of a
//! conventional layout, so error semantics and the outbound projection
//! cannot drift between resource types.

use std::marker::PhantomData;
use std::sync::Arc;

use super::errors::{ResourceError, ResourceResult};
use super::response::Created;
use crate::model::Entity;
use crate::store::{Filter, Store, StoreError};

pub struct ResourceHandler<E: Entity, S: Store<E>> {
    store: Arc<S>,
    _entity: PhantomData<E>,
}

impl<E: Entity, S: Store<E>> Clone for ResourceHandler<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, S: Store<E>> ResourceHandler<E, S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// List the full collection.
    pub async fn list(&self) -> ResourceResult<Vec<E>> {
        let records = self.store.list(None).await.map_err(Self::store_error)?;
        Ok(Self::guard_all(records))
    }

    /// List records whose filter field contains `needle`.
    pub async fn filter(&self, needle: &str) -> ResourceResult<Vec<E>> {
        if needle.is_empty() {
            return Err(ResourceError::InvalidInput(format!(
                "missing '{}' filter value",
                E::FILTER_PARAM
            )));
        }

        let filter = Filter::new(needle);
        let records = self
            .store
            .list(Some(&filter))
            .await
            .map_err(Self::store_error)?;
        Ok(Self::guard_all(records))
    }

    /// Fetch one record by its textual identifier.
    pub async fn get(&self, id: &str) -> ResourceResult<E> {
        let key = Self::parse_key(id)?;
        let mut record = self
            .store
            .find_by_id(&key)
            .await
            .map_err(Self::store_error)?
            .ok_or_else(|| Self::not_found(id))?;
        record.project_outbound();
        Ok(record)
    }

    /// Create a record, returning the stored form and its location.
    pub async fn create(&self, record: E) -> ResourceResult<Created<E>> {
        record
            .validate_create()
            .map_err(ResourceError::InvalidInput)?;

        let mut record = record;
        record.scrub_inbound();

        let stored = self.store.insert(record).await.map_err(Self::store_error)?;
        let key = stored.key().ok_or_else(|| {
            ResourceError::Internal(format!("store returned a {} without a key", E::NAME))
        })?;

        let mut outbound = stored;
        outbound.project_outbound();
        Ok(Created {
            location: format!("/api/{}/{}", E::COLLECTION, key),
            record: outbound,
        })
    }

    /// Replace a record wholesale. The path identifier must match the body's.
    pub async fn replace(&self, id: &str, record: E) -> ResourceResult<()> {
        let key = Self::parse_key(id)?;
        match record.key() {
            Some(body_key) if body_key == key => {}
            body_key => {
                return Err(ResourceError::IdentifierMismatch {
                    path: id.to_string(),
                    body: body_key
                        .map(|k| k.to_string())
                        .unwrap_or_else(|| "(none)".to_string()),
                });
            }
        }

        let mut record = record;
        record.scrub_inbound();

        match self.store.replace(&key, record).await {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound) => Err(Self::not_found(id)),
            Err(StoreError::ConcurrencyConflict) => {
                // Distinguish a record deleted mid-flight from one that was
                // overwritten: the former resolves to not-found, the latter
                // is fatal and surfaced to the caller.
                match self
                    .store
                    .find_by_id(&key)
                    .await
                    .map_err(Self::store_error)?
                {
                    None => Err(Self::not_found(id)),
                    Some(_) => Err(ResourceError::ConcurrencyConflict(format!(
                        "{} '{}' was modified by another writer",
                        E::NAME,
                        id
                    ))),
                }
            }
            Err(other) => Err(Self::store_error(other)),
        }
    }

    /// Remove a record by its textual identifier.
    pub async fn delete(&self, id: &str) -> ResourceResult<()> {
        let key = Self::parse_key(id)?;
        match self.store.delete(&key).await {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound) => Err(Self::not_found(id)),
            Err(other) => Err(Self::store_error(other)),
        }
    }

    fn parse_key(raw: &str) -> ResourceResult<E::Key> {
        raw.parse().map_err(|_| {
            ResourceError::InvalidInput(format!(
                "'{}' is not a valid {} identifier",
                raw,
                E::NAME
            ))
        })
    }

    fn not_found(id: &str) -> ResourceError {
        ResourceError::NotFound(format!("no {} with id '{}'", E::NAME, id))
    }

    fn guard_all(records: Vec<E>) -> Vec<E> {
        records
            .into_iter()
            .map(|mut record| {
                record.project_outbound();
                record
            })
            .collect()
    }

    fn store_error(err: StoreError) -> ResourceError {
        match err {
            StoreError::NotFound => ResourceError::NotFound(format!("no such {}", E::NAME)),
            StoreError::DuplicateKey(key) => {
                ResourceError::DuplicateKey(format!("{} '{}' already exists", E::NAME, key))
            }
            StoreError::ConcurrencyConflict => ResourceError::ConcurrencyConflict(format!(
                "{} was modified concurrently",
                E::NAME
            )),
            StoreError::Backend(msg) => ResourceError::Internal(msg),
        }
    }
}
