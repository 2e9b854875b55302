use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::state::SharedState;

use super::fields::FieldMap;
use super::metadata::ClientMeta;
use super::SubmissionKind;

/// A validated submission together with the confirmation shown to the caller.
#[derive(Debug, Clone)]
pub struct Acknowledgement<R> {
    pub kind: SubmissionKind,
    pub record: R,
    pub message: &'static str,
}

impl<R: Serialize> Acknowledgement<R> {
    /// `{"success": true, "<envelope>": record, "message": ...}`
    pub fn into_body(self) -> Result<Value, AppError> {
        let record = serde_json::to_value(&self.record)
            .map_err(|e| {
                AppError::Internal(format!("Failed to serialize {} record: {e}", self.kind.name()))
            })?;

        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(true));
        body.insert(self.kind.envelope().to_string(), record);
        body.insert("message".to_string(), Value::String(self.message.to_string()));
        Ok(Value::Object(body))
    }
}

/// Validate one submission and log the outcome. The clock is read once so
/// the date check, id and timestamp all agree.
pub fn run<R>(
    state: &SharedState,
    kind: SubmissionKind,
    meta: &ClientMeta,
    raw: Value,
    validate: impl FnOnce(&FieldMap, DateTime<Utc>) -> Result<R, AppError>,
) -> Result<Acknowledgement<R>, AppError> {
    let now = state.clock.now();

    let result = FieldMap::from_value(raw).and_then(|fields| validate(&fields, now));

    match result {
        Ok(record) => {
            tracing::info!(
                kind = kind.name(),
                id = crate::models::record_id(now),
                ip = %meta.ip,
                "Submission accepted"
            );
            Ok(Acknowledgement {
                kind,
                record,
                message: kind.confirmation(),
            })
        }
        Err(e) => {
            tracing::info!(
                kind = kind.name(),
                reason = e.kind(),
                ip = %meta.ip,
                user_agent = %meta.user_agent,
                "Submission rejected"
            );
            Err(e)
        }
    }
}
