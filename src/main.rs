//! HTTP server binary for the capitalize service.

use tokio::net::TcpListener;

use capitalize::{config, observability, HttpServer, Shutdown};

#[tokio::main]
async fn main() {
    // Best-effort; a missing .env file is not an error.
    let _ = dotenvy::dotenv();

    observability::logging::init();

    tracing::info!("capitalize v0.1.0 starting");

    let config = config::load_from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    let listen_address = config.bind_address();
    let listener = match TcpListener::bind(&listen_address).await {
        Ok(listener) => listener,
        Err(error) => {
            // Fatal but clean: log and exit without a crash status.
            tracing::error!(
                address = %listen_address,
                error = %error,
                "Could not listen on address"
            );
            return;
        }
    };

    tracing::info!(address = %listen_address, "Listening for connections");

    let shutdown = Shutdown::new();
    let serve_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    if let Err(error) = server.run(listener, serve_shutdown).await {
        tracing::error!(error = %error, "Server error");
    }

    tracing::info!("Shutdown complete");
}
