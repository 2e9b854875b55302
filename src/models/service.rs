use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry of the offered services listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
}

/// Echo of a "create service" request. Never added to the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    #[serde(serialize_with = "super::iso_millis")]
    pub created_at: DateTime<Utc>,
}
