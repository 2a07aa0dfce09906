//! Payload trait and registry for payloadd.
//!
//! This crate owns the dispatch contract: how named payloads are registered,
//! looked up and invoked, and how every outcome (including errors and panics
//! raised by a payload) is folded into a uniform `PayloadResult`. It depends
//! only on `payloadd-types` -- never on the HTTP or CLI layer.

pub mod payload;
pub mod registry;

pub use payload::{from_fn, FnPayload, Payload};
pub use registry::{PayloadRegistry, PayloadRegistryBuilder};
