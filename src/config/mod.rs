//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (resolve variables, fall back to defaults)
//!     → ServerConfig (immutable)
//!     → passed by value into the HTTP server constructor
//! ```
//!
//! # Design Decisions
//! - Config is resolved once at startup and never mutated afterwards
//! - Every field has a default so an empty environment still boots
//! - Bad values recover locally with a warning; config loading is never fatal

pub mod loader;
pub mod schema;

pub use loader::load_from_env;
pub use schema::ServerConfig;
