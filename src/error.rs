use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Every way a submission can be turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    MissingFields,
    InvalidEmail,
    InvalidPhone,
    PastDate,
    Internal(String),
}

impl AppError {
    /// Stable tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingFields => "missing_fields",
            AppError::InvalidEmail => "invalid_email",
            AppError::InvalidPhone => "invalid_phone",
            AppError::PastDate => "past_date",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Message shown to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingFields => "Missing required fields",
            AppError::InvalidEmail => "Invalid email format",
            AppError::InvalidPhone => "Invalid phone number format",
            AppError::PastDate => "Booking date must be in the future",
            AppError::Internal(_) => "Internal Server Error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            other => write!(f, "Bad Request: {}", other.public_message()),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            tracing::error!("Internal error: {msg}");
        }

        let body = json!({ "error": self.public_message() });
        (self.status(), axum::Json(body)).into_response()
    }
}
