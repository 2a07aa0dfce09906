//! The uniform outcome of a payload invocation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments passed to a payload: a JSON object with arbitrary values.
pub type PayloadArgs = serde_json::Map<String, Value>;

/// Result envelope produced by every dispatch.
///
/// Serializes to `{"success": bool, "output": <value>}`. On failure `output`
/// carries a human-readable message; on success it is whatever the payload
/// chose to return. The registry never inspects `output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadResult {
    pub success: bool,
    pub output: Value,
}

impl PayloadResult {
    /// A successful result carrying `output`.
    pub fn ok(output: impl Into<Value>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    /// A failed result carrying an explanatory `output`.
    pub fn fail(output: impl Into<Value>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}
