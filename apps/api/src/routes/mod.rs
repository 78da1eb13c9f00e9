pub mod analyze;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization, X-Requested-With, Accept";

pub fn build_router(state: AppState) -> Router {
    let origin = state.config.frontend_url.clone();
    let body_limit = state.config.max_upload_bytes;

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/analyze",
            post(analyze::handle_analyze).options(analyze::handle_preflight),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    with_cors_headers(router, origin)
}

/// Attaches CORS headers to every response, fallbacks and errors included.
/// Headers a handler already set are left alone.
fn with_cors_headers(router: Router, origin: HeaderValue) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
}
