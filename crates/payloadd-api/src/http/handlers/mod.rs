//! HTTP request handlers.

pub mod payload;
pub mod status;
