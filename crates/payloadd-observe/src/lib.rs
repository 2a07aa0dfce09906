//! Observability setup for payloadd: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
