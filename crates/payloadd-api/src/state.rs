//! Application state shared by CLI commands and HTTP handlers.
//!
//! The registry is built once here and never mutated afterwards; handlers get
//! it through axum's `State` extractor instead of a global.

use std::sync::Arc;

use payloadd_core::{PayloadRegistry, PayloadRegistryBuilder};
use payloadd_types::config::ServerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PayloadRegistry>,
}

impl AppState {
    /// Build the built-in registry, minus any payloads the config disables.
    pub fn from_config(config: &ServerConfig) -> Self {
        let builder = config
            .disabled_payloads
            .iter()
            .fold(PayloadRegistryBuilder::with_builtins(), |builder, name| {
                builder.without(name)
            });
        let registry = builder.build();

        tracing::info!(payloads = ?registry.list_names(), "Payload registry ready");

        Self::with_registry(registry)
    }

    /// Wrap an already-built registry, e.g. one with custom payloads.
    pub fn with_registry(registry: PayloadRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_default_serves_builtins() {
        let state = AppState::from_config(&ServerConfig::default());
        assert_eq!(
            state.registry.list_names(),
            vec!["echo".to_string(), "ping".to_string()]
        );
    }

    #[test]
    fn from_config_drops_disabled_payloads() {
        let config = ServerConfig {
            disabled_payloads: vec!["ping".to_string(), "unknown".to_string()],
            ..ServerConfig::default()
        };
        let state = AppState::from_config(&config);
        assert_eq!(state.registry.list_names(), vec!["echo".to_string()]);
    }
}
