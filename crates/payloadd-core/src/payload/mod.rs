//! The `Payload` trait and adapters for registering payloads.
//!
//! A payload is a synchronous function from an argument map to a
//! [`PayloadResult`]. Returning `Err` is how a payload "raises"; the registry
//! catches it (and any panic) at the dispatch boundary.

pub mod builtin;

use std::collections::BTreeMap;

use payloadd_types::error::PayloadError;
use payloadd_types::info::ParamSpec;
use payloadd_types::result::{PayloadArgs, PayloadResult};

/// A named unit of work that can be registered and dispatched.
///
/// The name lives in the registry, not on the payload, so one implementation
/// can be registered under several keys.
pub trait Payload: Send + Sync {
    /// Run the payload with the caller-supplied arguments.
    fn invoke(&self, args: &PayloadArgs) -> Result<PayloadResult, PayloadError>;

    /// One-line summary for discovery endpoints.
    fn description(&self) -> &str {
        ""
    }

    /// Accepted arguments, keyed by argument name.
    fn parameters(&self) -> BTreeMap<String, ParamSpec> {
        BTreeMap::new()
    }
}

/// A payload backed by a closure. Built with [`from_fn`].
pub struct FnPayload<F> {
    f: F,
}

/// Wrap a closure as a [`Payload`].
///
/// ```
/// use payloadd_core::from_fn;
/// use payloadd_types::result::PayloadResult;
///
/// let hello = from_fn(|_args| Ok(PayloadResult::ok("hello")));
/// ```
pub fn from_fn<F>(f: F) -> FnPayload<F>
where
    F: Fn(&PayloadArgs) -> Result<PayloadResult, PayloadError> + Send + Sync,
{
    FnPayload { f }
}

impl<F> Payload for FnPayload<F>
where
    F: Fn(&PayloadArgs) -> Result<PayloadResult, PayloadError> + Send + Sync,
{
    fn invoke(&self, args: &PayloadArgs) -> Result<PayloadResult, PayloadError> {
        (self.f)(args)
    }
}
