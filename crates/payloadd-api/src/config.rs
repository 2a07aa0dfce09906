//! Server configuration loader.
//!
//! Reads the TOML file named by `--config` / `PAYLOADD_CONFIG` and
//! deserializes it into [`ServerConfig`]. A missing file means defaults; a
//! file that exists but cannot be used is an error the caller reports once
//! logging is up.

use std::path::{Path, PathBuf};

use thiserror::Error;

use payloadd_types::config::ServerConfig;

/// A config file that exists but could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load server configuration from `path`.
///
/// - `None`, or a path that does not exist: [`ServerConfig::default()`].
/// - A file that cannot be read or parsed: [`ConfigError`].
/// - Otherwise: the parsed config.
pub async fn load_server_config(path: Option<&Path>) -> Result<ServerConfig, ConfigError> {
    let Some(config_path) = path else {
        return Ok(ServerConfig::default());
    };

    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ServerConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: config_path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str::<ServerConfig>(&content).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Apply `serve --host/--port` overrides on top of the loaded config.
pub fn apply_overrides(mut config: ServerConfig, host: Option<String>, port: Option<u16>) -> ServerConfig {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloadd_types::config::LogFormat;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_server_config_without_path_returns_default() {
        let config = load_server_config(None).await.unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[tokio::test]
    async fn load_server_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_server_config(Some(&tmp.path().join("payloadd.toml")))
            .await
            .unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[tokio::test]
    async fn load_server_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("payloadd.toml");
        tokio::fs::write(
            &config_path,
            r#"
host = "0.0.0.0"
port = 8080
log_format = "json"
disabled_payloads = ["echo"]
"#,
        )
        .await
        .unwrap();

        let config = load_server_config(Some(&config_path)).await.unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.disabled_payloads, vec!["echo".to_string()]);
    }

    #[tokio::test]
    async fn load_server_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("payloadd.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = load_server_config(Some(&config_path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[tokio::test]
    async fn load_server_config_directory_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_server_config(Some(tmp.path())).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn apply_overrides_replaces_only_given_values() {
        let config = apply_overrides(ServerConfig::default(), None, Some(9000));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);

        let config = apply_overrides(ServerConfig::default(), Some("0.0.0.0".to_string()), None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }
}
