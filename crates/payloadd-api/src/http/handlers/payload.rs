//! Payload discovery and execution endpoints.
//!
//! GET  /payloads              - registered names
//! GET  /payloads/info/{name}  - one payload's metadata
//! POST /payloads/execute      - run a payload (also mounted at /payloads/run)

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use payloadd_types::info::PayloadInfo;
use payloadd_types::result::{PayloadArgs, PayloadResult};

use crate::http::error::{AppError, ExecuteError};
use crate::http::response::ListResponse;
use crate::state::AppState;

/// Request body for the execute endpoints.
///
/// The name is read from `payload`, or from `name` as older clients send it.
/// An absent, `null` or empty name all count as missing. Unknown fields
/// (`async`, `timestamp`) are ignored.
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default, alias = "name")]
    pub payload: Option<String>,

    #[serde(default)]
    pub args: PayloadArgs,
}

/// GET /payloads - List registered payload names.
pub async fn list_payloads(State(state): State<AppState>) -> Json<ListResponse> {
    let registry = state.registry.clone();
    match tokio::task::spawn_blocking(move || registry.list_names()).await {
        Ok(names) => Json(ListResponse::listed(names)),
        Err(err) => {
            tracing::error!(error = ?err, "Payload enumeration failed");
            Json(ListResponse::failed(err.to_string()))
        }
    }
}

/// GET /payloads/info/{name} - Describe one payload.
pub async fn payload_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PayloadInfo>, AppError> {
    state
        .registry
        .info(&name)
        .map(Json)
        .ok_or(AppError::UnknownPayload(name))
}

/// POST /payloads/execute - Run a payload and return its result envelope.
///
/// Rejects a missing name with 400 and an unregistered one with 404 before
/// dispatch. Everything else answers 200; `success` in the body carries the
/// real outcome.
pub async fn execute(
    State(state): State<AppState>,
    body: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Result<Result<Json<Value>, ExecuteError>, AppError> {
    let Json(ExecuteRequest { payload, args }) = body?;

    let name = match payload {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::MissingPayloadName),
    };
    if !state.registry.contains(&name) {
        return Err(AppError::UnknownPayload(name));
    }

    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("execute", %request_id, payload = %name);

    let registry = state.registry.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        span.in_scope(|| registry.dispatch(&name, &args))
    })
    .await;

    Ok(outcome
        .map_err(ExecuteError::from)
        .and_then(|result| render_result(&result))
        .map(Json))
}

/// Render a result as JSON and check it has the envelope shape.
pub fn render_result(result: &PayloadResult) -> Result<Value, ExecuteError> {
    let value =
        serde_json::to_value(result).map_err(|e| ExecuteError::MalformedResult(Some(e)))?;
    match value.get("success") {
        Some(Value::Bool(_)) => Ok(value),
        _ => Err(ExecuteError::MalformedResult(None)),
    }
}
