pub mod forms;
pub mod ingest;
pub mod services;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/bookings", post(forms::create_booking))
        .route("/contact", post(forms::create_contact))
        .route("/join-team", post(forms::create_application))
        .route("/services", get(services::list).post(services::create))
}
