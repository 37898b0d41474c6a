//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the capitalize handler on every path
//! - Wire up middleware (request logging outermost, then tracing)
//! - Serve connections until the shutdown signal fires

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handlers::capitalize_handler;
use crate::http::middleware::log_requests;

/// HTTP server for the capitalize service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router() -> Router {
        // Both routes dispatch to the same handler so error messages can
        // carry the request path; the handler owns method validation.
        Router::new()
            .route("/", any(capitalize_handler))
            .route("/{*path}", any(capitalize_handler))
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(log_requests))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
