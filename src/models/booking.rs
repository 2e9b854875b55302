use chrono::{DateTime, Utc};
use serde::Serialize;

use super::SubmissionStatus;

#[derive(Debug, Clone, Serialize)]
pub struct BookingRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub booking_date: String,
    pub time: String,
    pub message: String,
    pub status: SubmissionStatus,
    #[serde(serialize_with = "super::iso_millis")]
    pub created_at: DateTime<Utc>,
}
