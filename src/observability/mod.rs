//! Logging infrastructure.
//!
//! Structured logging via `tracing`, with human-readable and JSON
//! output formats and environment-based override.

pub mod logging;

pub use logging::{LogFormat, init_logging};
