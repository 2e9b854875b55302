use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ContactRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(serialize_with = "super::iso_millis")]
    pub created_at: DateTime<Utc>,
}
