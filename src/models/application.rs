use chrono::{DateTime, Utc};
use serde::Serialize;

use super::SubmissionStatus;

/// A job application to join the cleaning team.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub availability: String,
    pub transportation: bool,
    pub background_check: bool,
    pub message: String,
    pub status: SubmissionStatus,
    #[serde(serialize_with = "super::iso_millis")]
    pub created_at: DateTime<Utc>,
}
