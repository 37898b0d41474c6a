//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load .env → init logging → resolve config → bind listener → serve
//!
//! Shutdown (shutdown.rs):
//!     ctrl-c (or a test trigger) → broadcast → serve loop drains and exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
