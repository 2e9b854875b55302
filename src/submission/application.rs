use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{record_id, ApplicationRecord, SubmissionStatus};

use super::fields::{self, FieldMap};

/// Validate a "join the team" application and build its pending record.
pub fn validate_application(
    fields: &FieldMap,
    now: DateTime<Utc>,
) -> Result<ApplicationRecord, AppError> {
    let (Some(first_name), Some(last_name), Some(email), Some(phone), Some(position)) = (
        fields.text("first_name"),
        fields.text("last_name"),
        fields.text("email"),
        fields.text("phone"),
        fields.text("position"),
    ) else {
        return Err(AppError::MissingFields);
    };

    fields::check_email(&email)?;
    fields::check_phone(&phone)?;

    Ok(ApplicationRecord {
        id: record_id(now),
        first_name,
        last_name,
        email,
        phone,
        position,
        experience: fields.text_or_default("experience"),
        availability: fields.text_or_default("availability"),
        transportation: fields.flag("transportation"),
        background_check: fields.flag("background_check"),
        message: fields.text_or_default("message"),
        status: SubmissionStatus::Pending,
        created_at: now,
    })
}
