//! Response bodies outside the dispatched `{"success", "output"}` envelope.
//!
//! Every body carries a boolean `success` so clients can branch on it
//! without looking at the HTTP status:
//!
//! ```json
//! {"success": true, "payloads": ["echo", "ping"]}
//! {"success": false, "error": "...", "type": "MalformedResult"}
//! {"success": false, "detail": "Missing payload name"}
//! ```

use serde::Serialize;

/// Body of `GET /payloads`.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,

    /// Registered names (success only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payloads: Option<Vec<String>>,

    /// Why enumeration failed (failure only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListResponse {
    pub fn listed(payloads: Vec<String>) -> Self {
        Self {
            success: true,
            payloads: Some(payloads),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            payloads: None,
            error: Some(error.into()),
        }
    }
}

/// Body for an unexpected failure around dispatch.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
    /// Failure category name.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            kind: kind.into(),
        }
    }
}

/// Body for transport-level client errors (400/404/422).
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub success: bool,
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            detail: detail.into(),
        }
    }
}
