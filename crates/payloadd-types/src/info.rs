//! Descriptive metadata for registered payloads.
//!
//! Served by the discovery endpoints so a client can render a form or a help
//! screen without knowing each payload in advance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata describing one registered payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadInfo {
    /// Registry key the payload is dispatched under.
    pub name: String,
    /// Human-readable summary. Empty when the payload gives none.
    pub description: String,
    /// Accepted arguments keyed by argument name.
    pub parameters: BTreeMap<String, ParamSpec>,
}

/// Description of a single accepted argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// JSON type name (`"string"`, `"number"`, `"object"`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// Value used when the argument is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParamSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            default: None,
            description: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_spec_renames_kind_to_type() {
        let spec = ParamSpec::new("string").with_default("");
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value, json!({"type": "string", "default": ""}));
    }

    #[test]
    fn payload_info_shape() {
        let mut parameters = BTreeMap::new();
        parameters.insert(
            "msg".to_string(),
            ParamSpec::new("string").with_description("text to echo back"),
        );
        let info = PayloadInfo {
            name: "echo".to_string(),
            description: "Echo a message".to_string(),
            parameters,
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["name"], "echo");
        assert_eq!(value["parameters"]["msg"]["type"], "string");
        assert_eq!(value["parameters"]["msg"]["description"], "text to echo back");
        assert!(value["parameters"]["msg"].get("default").is_none());
    }
}
