//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/logging.rs (request start/end events)
//!     → handlers.rs (method + query validation, transform)
//!     → response.rs (JSON envelope, CRLF-terminated body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use response::Envelope;
pub use server::HttpServer;
