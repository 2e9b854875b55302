pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_app(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;
    let cors = cors_layer(&state.config.cors_origins);

    let mut router = Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health));

    if let Some(dir) = &state.config.site_dir {
        tracing::info!("Serving site from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

async fn health() -> &'static str {
    "ok"
}
