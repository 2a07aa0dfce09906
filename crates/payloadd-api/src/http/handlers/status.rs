//! Liveness endpoints and the JSON 404 fallback.

use axum::Json;
use serde_json::{json, Value};

use crate::http::error::AppError;

/// GET / - Minimal liveness probe.
pub async fn root() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// GET /health - Liveness probe with the server version.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
