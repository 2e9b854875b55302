use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9\s\-()+]+$").unwrap());

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The decoded fields of one form submission.
#[derive(Debug, Clone, Default)]
pub struct FieldMap(Map<String, Value>);

impl FieldMap {
    /// Wrap a parsed payload. Anything but an object is unusable as a form.
    pub fn from_value(raw: Value) -> Result<Self, AppError> {
        match raw {
            Value::Object(map) => Ok(FieldMap(map)),
            other => Err(AppError::Internal(format!(
                "Expected an object payload, got {}",
                json_type(&other)
            ))),
        }
    }

    /// A present field as text. Falsy values (absent, null, "", 0, false) and
    /// nested values count as missing.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f != 0.0 => Some(n.to_string()),
                _ => None,
            },
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// An optional text field, defaulting to "".
    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default()
    }

    /// An optional boolean flag, defaulting to false. Accepts checkbox posts.
    pub fn flag(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            ),
            _ => false,
        }
    }
}

impl From<Map<String, Value>> for FieldMap {
    fn from(map: Map<String, Value>) -> Self {
        FieldMap(map)
    }
}

pub fn check_email(email: &str) -> Result<(), AppError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(AppError::InvalidEmail)
    }
}

/// Only the character set is checked, not the digit count.
pub fn check_phone(phone: &str) -> Result<(), AppError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(AppError::InvalidPhone)
    }
}

/// `date` must parse and lie strictly after `now`.
pub fn check_future_date(date: &str, now: DateTime<Utc>) -> Result<(), AppError> {
    match parse_date(date) {
        Some(when) if when > now => Ok(()),
        _ => Err(AppError::PastDate),
    }
}

/// Parse a calendar date or date-time, reading values without an offset as UTC.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // A trailing Z is UTC; spell it as an offset for strftime parsing.
    let with_offset = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => s.to_string(),
    };
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
