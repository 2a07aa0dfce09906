//! Axum router configuration with middleware.
//!
//! Middleware: CORS (open, so a browser or device debug client can call in)
//! and request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let payload_routes = Router::new()
        .route("/", get(handlers::payload::list_payloads))
        .route("/info/{name}", get(handlers::payload::payload_info))
        .route("/execute", post(handlers::payload::execute))
        .route("/run", post(handlers::payload::execute));

    Router::new()
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health_check))
        .nest("/payloads", payload_routes)
        .fallback(handlers::status::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
