//! Word-capitalization service library.
//!
//! # Architecture Overview
//!
//! ```text
//!     CLI:    args ──▶ transform ──▶ stdout
//!
//!     HTTP:   request ──▶ middleware/logging ──▶ handlers ──▶ transform
//!                 ◀── response envelope (JSON + CRLF) ◀──┘
//!
//!     Cross-cutting: config (env + defaults), observability (tracing),
//!     lifecycle (graceful shutdown)
//! ```

// Core subsystems
pub mod http;
pub mod transform;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
