use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{record_id, ContactRecord};

use super::fields::{self, FieldMap};

pub fn validate_contact(fields: &FieldMap, now: DateTime<Utc>) -> Result<ContactRecord, AppError> {
    let (Some(name), Some(email), Some(subject), Some(message)) = (
        fields.text("name"),
        fields.text("email"),
        fields.text("subject"),
        fields.text("message"),
    ) else {
        return Err(AppError::MissingFields);
    };

    fields::check_email(&email)?;

    Ok(ContactRecord {
        id: record_id(now),
        name,
        email,
        subject,
        message,
        created_at: now,
    })
}
