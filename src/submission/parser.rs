use axum::http::HeaderMap;
use bytes::Bytes;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Decode a form post into a JSON value, picking the format from Content-Type.
/// A body that cannot be decoded at all is an internal error, not a rejection.
pub async fn parse(headers: &HeaderMap, body: Bytes) -> Result<Value, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let parsed = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parse_multipart(headers, body).await
    } else {
        parse_body(content_type, &body)
    };

    parsed.map_err(AppError::Internal)
}

pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let Some(ct) = content_type else {
        return parse_unlabelled(body);
    };

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        parse_unlabelled(body)
    }
}

/// Try JSON first, then form-urlencoded.
fn parse_unlabelled(body: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(body)
        .or_else(|_| parse_form_urlencoded(body))
        .map_err(|e| format!("Unable to parse body: {e}"))
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    // Repeated keys keep the last value, as a browser form would post them.
    let map: Map<String, Value> = form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect();
    Ok(Value::Object(map))
}

async fn parse_multipart(headers: &HeaderMap, body: Bytes) -> Result<Value, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("unknown").to_string();
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        map.insert(name, Value::String(value));
    }

    Ok(Value::Object(map))
}
