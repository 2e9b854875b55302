use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{record_id, BookingRecord, SubmissionStatus};

use super::fields::{self, FieldMap};

/// Validate a booking request and build its pending record.
pub fn validate_booking(fields: &FieldMap, now: DateTime<Utc>) -> Result<BookingRecord, AppError> {
    let (
        Some(name),
        Some(email),
        Some(phone),
        Some(address),
        Some(service_type),
        Some(booking_date),
        Some(time),
    ) = (
        fields.text("name"),
        fields.text("email"),
        fields.text("phone"),
        fields.text("address"),
        fields.text("service_type"),
        fields.text("booking_date"),
        fields.text("time"),
    )
    else {
        return Err(AppError::MissingFields);
    };

    fields::check_email(&email)?;
    fields::check_phone(&phone)?;
    fields::check_future_date(&booking_date, now)?;

    Ok(BookingRecord {
        id: record_id(now),
        name,
        email,
        phone,
        address,
        service_type,
        booking_date,
        time,
        message: fields.text_or_default("message"),
        status: SubmissionStatus::Pending,
        created_at: now,
    })
}
