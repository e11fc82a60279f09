//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Request ID flows through all log events
//! - `RUST_LOG` overrides the configured log level

pub mod logging;
