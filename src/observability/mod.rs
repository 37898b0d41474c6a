//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - `RUST_LOG` overrides when set; otherwise `ENVIRONMENT` picks the
//!   default level
//! - Request start/end events are debug level, visible in develop mode

pub mod logging;
