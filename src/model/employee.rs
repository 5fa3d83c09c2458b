//! Employee record type.
//!
//! Employees self-reference through `reportsTo` (a manager chain that the
//! store does not guarantee acyclic), so every record leaving the core goes
//! through `project_outbound`: the link is removed before serialization can
//! walk it, and the photo blob is dropped from list/detail views. The
//! manager's identity survives as the flat `managerId` field.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Employee record. The key is store-generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: Option<i32>,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    #[serde(default, with = "photo_base64", skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
    pub reports_to: Option<i32>,
    /// Outbound-only flat manager link; ignored on input.
    #[serde(default, skip_deserializing)]
    pub manager_id: Option<i32>,
    #[serde(default)]
    pub row_version: u64,
}

impl Entity for Employee {
    type Key = i32;

    const NAME: &'static str = "employee";
    const COLLECTION: &'static str = "employees";
    const FILTER_ROUTE: &'static str = "bytitle";
    const FILTER_PARAM: &'static str = "title";
    const GENERATED_KEY: bool = true;

    fn key(&self) -> Option<i32> {
        self.employee_id
    }

    fn set_key(&mut self, key: i32) {
        self.employee_id = Some(key);
    }

    fn row_version(&self) -> u64 {
        self.row_version
    }

    fn set_row_version(&mut self, version: u64) {
        self.row_version = version;
    }

    fn filter_field(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Setting a manager through the API is not supported: the reference is
    /// never validated against the collection, so it is dropped before any
    /// write reaches the store.
    fn scrub_inbound(&mut self) {
        self.reports_to = None;
        self.manager_id = None;
    }

    /// The cycle guard. Serialization walks object graphs eagerly with no
    /// depth check, so the self-reference must not survive past this point.
    fn project_outbound(&mut self) {
        self.manager_id = self.reports_to.take();
        self.photo = None;
    }
}

mod photo_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        photo: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match photo {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
