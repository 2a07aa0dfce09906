//! Built-in payloads shipped with every server.

use std::collections::BTreeMap;

use serde_json::Value;

use payloadd_types::error::PayloadError;
use payloadd_types::info::ParamSpec;
use payloadd_types::result::{PayloadArgs, PayloadResult};

use super::Payload;

/// Liveness probe. Ignores its arguments and answers `"pong"`.
pub struct Ping;

impl Payload for Ping {
    fn invoke(&self, _args: &PayloadArgs) -> Result<PayloadResult, PayloadError> {
        Ok(PayloadResult::ok("pong"))
    }

    fn description(&self) -> &str {
        "Reply with pong"
    }
}

/// Echo the `msg` argument back, prefixed with `"echo: "`.
///
/// A missing `msg`, or one that is not a JSON string, echoes as empty.
pub struct Echo;

impl Payload for Echo {
    fn invoke(&self, args: &PayloadArgs) -> Result<PayloadResult, PayloadError> {
        let msg = args.get("msg").and_then(Value::as_str).unwrap_or("");
        Ok(PayloadResult::ok(format!("echo: {msg}")))
    }

    fn description(&self) -> &str {
        "Echo a message back to the caller"
    }

    fn parameters(&self) -> BTreeMap<String, ParamSpec> {
        BTreeMap::from([(
            "msg".to_string(),
            ParamSpec::new("string")
                .with_default("")
                .with_description("Text to echo back"),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> PayloadArgs {
        match value {
            Value::Object(map) => map,
            _ => panic!("test args must be an object"),
        }
    }

    #[test]
    fn ping_ignores_args() {
        let result = Ping.invoke(&args(json!({"anything": [1, 2]}))).unwrap();
        assert_eq!(result, PayloadResult::ok("pong"));
    }

    #[test]
    fn echo_reads_msg() {
        let result = Echo.invoke(&args(json!({"msg": "hi"}))).unwrap();
        assert_eq!(result, PayloadResult::ok("echo: hi"));
    }

    #[test]
    fn echo_missing_msg_is_empty() {
        let result = Echo.invoke(&PayloadArgs::new()).unwrap();
        assert_eq!(result, PayloadResult::ok("echo: "));
    }

    #[test]
    fn echo_non_string_msg_is_empty() {
        let result = Echo.invoke(&args(json!({"msg": 42}))).unwrap();
        assert_eq!(result, PayloadResult::ok("echo: "));

        let result = Echo.invoke(&args(json!({"msg": null}))).unwrap();
        assert_eq!(result, PayloadResult::ok("echo: "));
    }

    #[test]
    fn echo_documents_msg_parameter() {
        let params = Echo.parameters();
        let msg = params.get("msg").unwrap();
        assert_eq!(msg.kind, "string");
        assert_eq!(msg.default, Some(json!("")));
    }
}
