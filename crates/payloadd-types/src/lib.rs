//! Shared types for payloadd.
//!
//! The uniform result envelope, the payload argument map, payload metadata,
//! error types and the server configuration shape.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod info;
pub mod result;
