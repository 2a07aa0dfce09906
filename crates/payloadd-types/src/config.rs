//! Server configuration types for payloadd.
//!
//! `ServerConfig` represents the optional `payloadd.toml` that controls the
//! listen address, log output format and which built-in payloads are served.

use serde::{Deserialize, Serialize};

/// Top-level server configuration.
///
/// All fields have sensible defaults, so an empty file (or no file at all)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Built-in payload names to leave out of the registry.
    #[serde(default)]
    pub disabled_payloads: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_format: LogFormat::default(),
            disabled_payloads: Vec::new(),
        }
    }
}

/// Output format for the `fmt` tracing layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, single-line records.
    #[default]
    Pretty,
    /// Newline-delimited JSON records.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.disabled_payloads.is_empty());
    }

    #[test]
    fn server_config_deserialize_with_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn server_config_deserialize_with_values() {
        let toml_str = r#"
host = "0.0.0.0"
port = 9001
log_format = "json"
disabled_payloads = ["echo"]
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9001);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.disabled_payloads, vec!["echo".to_string()]);
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = toml::from_str::<ServerConfig>(r#"log_format = "xml""#);
        assert!(result.is_err());
    }
}
