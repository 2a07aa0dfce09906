//! Error types for the HTTP layer.
//!
//! [`AppError`] covers the transport-level rejections that happen before
//! dispatch and maps each to a status code. [`ExecuteError`] covers the
//! unexpected failures around dispatch; those still answer HTTP 200 with a
//! `success: false` body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::response::{DetailResponse, FailureResponse};

/// Request rejected before it reaches the registry.
#[derive(Debug)]
pub enum AppError {
    /// Empty or absent payload name.
    MissingPayloadName,
    /// Non-empty name that is not registered.
    UnknownPayload(String),
    /// Body is not JSON matching the request schema.
    InvalidBody(JsonRejection),
    /// No route matches the request path.
    RouteNotFound,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::MissingPayloadName => {
                (StatusCode::BAD_REQUEST, "Missing payload name".to_string())
            }
            AppError::UnknownPayload(name) => {
                (StatusCode::NOT_FOUND, format!("Unknown payload: {name}"))
            }
            AppError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };

        (status, Json(DetailResponse::new(detail))).into_response()
    }
}

/// Unexpected failure on the execute path, outside the registry's own capture.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The result did not render to a `{"success": bool, ...}` object.
    #[error("Payload did not return a valid result object")]
    MalformedResult(#[source] Option<serde_json::Error>),

    /// The blocking task running dispatch was cancelled or panicked.
    #[error("payload task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ExecuteError {
    /// Category name rendered as the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            ExecuteError::MalformedResult(_) => "MalformedResult",
            ExecuteError::Task(_) => "JoinError",
        }
    }
}

impl IntoResponse for ExecuteError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), error = ?self, "Payload execution failed unexpectedly");
        (
            StatusCode::OK,
            Json(FailureResponse::new(self.to_string(), self.kind())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_name_is_bad_request() {
        let response = AppError::MissingPayloadName.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "detail": "Missing payload name"})
        );
    }

    #[tokio::test]
    async fn unknown_name_is_not_found() {
        let response = AppError::UnknownPayload("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Unknown payload: nope");
    }

    #[tokio::test]
    async fn malformed_result_answers_ok_with_type() {
        let response = ExecuteError::MalformedResult(None).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "error": "Payload did not return a valid result object",
                "type": "MalformedResult",
            })
        );
    }

    #[tokio::test]
    async fn task_panic_answers_ok_with_type() {
        let join_err = tokio::task::spawn_blocking::<_, ()>(|| panic!("worker died"))
            .await
            .unwrap_err();
        let response = ExecuteError::from(join_err).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["type"], "JoinError");
        assert!(body["error"].as_str().unwrap().starts_with("payload task failed"));
    }
}
