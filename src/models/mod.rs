pub mod application;
pub mod booking;
pub mod contact;
pub mod service;

pub use application::ApplicationRecord;
pub use booking::BookingRecord;
pub use contact::ContactRecord;
pub use service::{Service, ServiceRecord};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
}

/// Serialize a timestamp as `2026-10-18T09:30:00.000Z`.
pub fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Record id for a submission processed at `now`.
pub fn record_id(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
}
