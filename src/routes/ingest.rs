use std::net::SocketAddr;

use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{metadata, parser, pipeline, FieldMap, SubmissionKind};

/// Parse, validate and acknowledge a single form post.
pub async fn accept<R: Serialize>(
    state: &SharedState,
    peer: SocketAddr,
    headers: &HeaderMap,
    body: Bytes,
    kind: SubmissionKind,
    validate: impl FnOnce(&FieldMap, DateTime<Utc>) -> Result<R, AppError>,
) -> Result<Response, AppError> {
    let meta = metadata::extract(headers, peer.ip(), &state.config.trusted_proxies);

    let raw = parser::parse(headers, body).await.inspect_err(|e| {
        tracing::warn!(kind = kind.name(), ip = %meta.ip, "Unreadable submission body: {e}");
    })?;

    let ack = pipeline::run(state, kind, &meta, raw, validate)?;

    Ok((StatusCode::CREATED, Json(ack.into_body()?)).into_response())
}
