//! HTTP layer for payloadd.
//!
//! Axum routes for discovery and execution. The layer validates the payload
//! name (400 when missing, 404 when unregistered) and hands everything else
//! to the registry, rendering its result as the JSON body.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
