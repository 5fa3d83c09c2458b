//! Customer record type.
//!
//! Customers are the one entity type with a caller-supplied key: a non-empty
//! string identifier that must be unique across the collection.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Customer record. Contact fields are opaque strings to the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub customer_id: String,
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub row_version: u64,
}

impl Entity for Customer {
    type Key = String;

    const NAME: &'static str = "customer";
    const COLLECTION: &'static str = "customers";
    const FILTER_ROUTE: &'static str = "byname";
    const FILTER_PARAM: &'static str = "name";
    const GENERATED_KEY: bool = false;

    fn key(&self) -> Option<String> {
        if self.customer_id.is_empty() {
            None
        } else {
            Some(self.customer_id.clone())
        }
    }

    fn set_key(&mut self, key: String) {
        self.customer_id = key;
    }

    fn row_version(&self) -> u64 {
        self.row_version
    }

    fn set_row_version(&mut self, version: u64) {
        self.row_version = version;
    }

    fn filter_field(&self) -> &str {
        self.company_name.as_deref().unwrap_or("")
    }

    fn validate_create(&self) -> Result<(), String> {
        if self.customer_id.is_empty() {
            return Err("customerId must be a non-empty string".to_string());
        }
        Ok(())
    }
}
