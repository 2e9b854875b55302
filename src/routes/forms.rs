use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{self, SubmissionKind};

use super::ingest;

pub async fn create_booking(
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
        SubmissionKind::Booking,
        submission::validate_booking,
    )
    .await
}

pub async fn create_contact(
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
        SubmissionKind::Contact,
        submission::validate_contact,
    )
    .await
}

pub async fn create_application(
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
        SubmissionKind::Application,
        submission::validate_application,
    )
    .await
}
