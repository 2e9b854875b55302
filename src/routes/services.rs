use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;

use crate::catalog;
use crate::error::AppError;
use crate::models::Service;
use crate::state::SharedState;
use crate::submission::SubmissionKind;

use super::ingest;

/// Always succeeds; a failing catalog source falls back to the fixed listing.
pub async fn list(State(state): State<SharedState>) -> Json<Vec<Service>> {
    Json(catalog::list_or_fallback(state.catalog.as_ref()).await)
}

pub async fn create(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    ingest::accept(
        &state,
        addr,
        &headers,
        body,
        SubmissionKind::Service,
        catalog::validate_service,
    )
    .await
}
