//! Product record type.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Product record. Price and stock fields are opaque to the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Option<i32>,
    pub product_name: String,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i16>,
    #[serde(default)]
    pub row_version: u64,
}

impl Entity for Product {
    type Key = i32;

    const NAME: &'static str = "product";
    const COLLECTION: &'static str = "products";
    const FILTER_ROUTE: &'static str = "byname";
    const FILTER_PARAM: &'static str = "name";
    const GENERATED_KEY: bool = true;

    fn key(&self) -> Option<i32> {
        self.product_id
    }

    fn set_key(&mut self, key: i32) {
        self.product_id = Some(key);
    }

    fn row_version(&self) -> u64 {
        self.row_version
    }

    fn set_row_version(&mut self, version: u64) {
        self.row_version = version;
    }

    fn filter_field(&self) -> &str {
        &self.product_name
    }
}
