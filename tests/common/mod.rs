//! Shared utilities for integration testing.

use std::time::Duration;

use capitalize::{HttpServer, ServerConfig, Shutdown};
use tokio::net::TcpListener;

/// Spawn a capitalize server on the given port and return its shutdown
/// handle. Each test uses a unique port to avoid cross-test interference.
pub async fn start_server(port: u16) -> Shutdown {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
    };

    let listener = TcpListener::bind(config.bind_address()).await.unwrap();
    let server = HttpServer::new(config);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}
