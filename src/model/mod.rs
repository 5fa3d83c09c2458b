//! # Entity Model
//!
//! Record shapes for the three resource types and the descriptor trait the
//! generic resource handler is parameterized over.

pub mod customer;
pub mod employee;
pub mod product;

pub use customer::Customer;
pub use employee::Employee;
pub use product::Product;

use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Identifier type usable as an entity key.
///
/// Keys are parsed from their textual route form and, for store-generated
/// key types, derived from the store's insert sequence.
pub trait EntityKey:
    Clone + Eq + Hash + Display + FromStr + Send + Sync + 'static
{
    /// Derive a generated key from a store sequence number.
    ///
    /// Returns `None` for key types the store does not generate.
    fn from_seq(seq: i64) -> Option<Self>;
}

impl EntityKey for i32 {
    fn from_seq(seq: i64) -> Option<Self> {
        i32::try_from(seq).ok()
    }
}

impl EntityKey for String {
    fn from_seq(_seq: i64) -> Option<Self> {
        None
    }
}

/// Per-entity-type descriptor.
///
/// Everything the generic resource handler and routes need to know about a
/// record type lives here: identity rules, the filter binding, and the
/// inbound/outbound record hooks. One implementation per entity type
/// replaces the per-entity controller duplication of a conventional layout.
pub trait Entity:
    Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
    type Key: EntityKey;

    /// Singular name used in diagnostics ("customer").
    const NAME: &'static str;
    /// Collection segment in routes and locations ("customers").
    const COLLECTION: &'static str;
    /// Route segment of the filter operation ("byname").
    const FILTER_ROUTE: &'static str;
    /// Query parameter carrying the filter needle ("name").
    const FILTER_PARAM: &'static str;
    /// Whether the store assigns the key on insert.
    const GENERATED_KEY: bool;

    /// The record's key, if present.
    fn key(&self) -> Option<Self::Key>;

    /// Overwrite the record's key (used by the store on insert/replace).
    fn set_key(&mut self, key: Self::Key);

    /// The store's concurrency token for this record. Zero means the writer
    /// presented no token.
    fn row_version(&self) -> u64;

    fn set_row_version(&mut self, version: u64);

    /// The field value the filter operation matches against.
    fn filter_field(&self) -> &str;

    /// Shape validation applied on create.
    fn validate_create(&self) -> Result<(), String> {
        Ok(())
    }

    /// Strip inbound fields the core refuses to accept (default: none).
    fn scrub_inbound(&mut self) {}

    /// Project the record for client consumption (default: identity).
    fn project_outbound(&mut self) {}
}
