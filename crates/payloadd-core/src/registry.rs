//! Payload registry: name lookup plus dispatch with uniform failure capture.
//!
//! A registry is assembled once with [`PayloadRegistryBuilder`] and is
//! read-only afterwards, so it can be shared behind an `Arc` and dispatched
//! from many requests at once without locking.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use payloadd_types::info::PayloadInfo;
use payloadd_types::result::{PayloadArgs, PayloadResult};

use crate::payload::builtin::{Echo, Ping};
use crate::payload::Payload;

/// Output used when a payload panics with something other than a string.
const OPAQUE_PANIC_MESSAGE: &str = "payload panicked";

/// Immutable name-to-payload mapping.
pub struct PayloadRegistry {
    payloads: HashMap<String, Box<dyn Payload>>,
}

impl PayloadRegistry {
    /// Start building a registry with no payloads.
    pub fn builder() -> PayloadRegistryBuilder {
        PayloadRegistryBuilder::new()
    }

    /// Registry holding the built-in `ping` and `echo` payloads.
    pub fn with_builtins() -> Self {
        PayloadRegistryBuilder::with_builtins().build()
    }

    /// All registered payload names, sorted.
    ///
    /// The order is only for stable output; treat the result as a set.
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.payloads.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Whether `name` is a registered payload.
    pub fn contains(&self, name: &str) -> bool {
        self.payloads.contains_key(name)
    }

    /// Metadata for one payload, or `None` if `name` is not registered.
    pub fn info(&self, name: &str) -> Option<PayloadInfo> {
        self.payloads.get(name).map(|payload| PayloadInfo {
            name: name.to_string(),
            description: payload.description().to_string(),
            parameters: payload.parameters(),
        })
    }

    /// Metadata for every payload, sorted by name.
    pub fn infos(&self) -> Vec<PayloadInfo> {
        self.list_names()
            .iter()
            .filter_map(|name| self.info(name))
            .collect()
    }

    /// Resolve `name` and invoke it, folding every outcome into a result.
    ///
    /// - unknown name: `success: false`, output `"Unknown payload: <name>"`
    /// - payload returned `Ok`: that result, unchanged
    /// - payload returned `Err`: `success: false`, output is the error message
    /// - payload panicked: `success: false`, output is the panic message
    ///
    /// Never panics and never returns an error.
    #[tracing::instrument(name = "dispatch", skip(self, name, args), fields(payload = %name))]
    pub fn dispatch(&self, name: &str, args: &PayloadArgs) -> PayloadResult {
        let Some(payload) = self.payloads.get(name) else {
            tracing::warn!("Dispatch requested for unknown payload");
            return PayloadResult::fail(format!("Unknown payload: {name}"));
        };

        match panic::catch_unwind(AssertUnwindSafe(|| payload.invoke(args))) {
            Ok(Ok(result)) => {
                tracing::debug!(success = result.success, "Payload completed");
                result
            }
            Ok(Err(err)) => {
                tracing::error!(error = ?err, "Payload raised an error");
                PayloadResult::fail(err.to_string())
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!(error = %message, "Payload panicked");
                PayloadResult::fail(message)
            }
        }
    }
}

impl Default for PayloadRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for PayloadRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadRegistry")
            .field("payloads", &self.list_names())
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        OPAQUE_PANIC_MESSAGE.to_string()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Collects payloads during startup; [`build`](Self::build) freezes them.
#[derive(Default)]
pub struct PayloadRegistryBuilder {
    payloads: HashMap<String, Box<dyn Payload>>,
}

impl PayloadRegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-loaded with `ping` and `echo`.
    pub fn with_builtins() -> Self {
        Self::new().register("ping", Ping).register("echo", Echo)
    }

    /// Register `payload` under `name`.
    ///
    /// A payload already registered under the same name is replaced.
    pub fn register(mut self, name: impl Into<String>, payload: impl Payload + 'static) -> Self {
        let name = name.into();
        if self.payloads.insert(name.clone(), Box::new(payload)).is_some() {
            tracing::debug!(payload = %name, "Replaced previously registered payload");
        }
        self
    }

    /// Drop `name` from the set being built. Unknown names are logged and ignored.
    pub fn without(mut self, name: &str) -> Self {
        if self.payloads.remove(name).is_none() {
            tracing::warn!(payload = %name, "Cannot disable unregistered payload");
        }
        self
    }

    /// Freeze the collected payloads into an immutable registry.
    pub fn build(self) -> PayloadRegistry {
        PayloadRegistry {
            payloads: self.payloads,
        }
    }
}
