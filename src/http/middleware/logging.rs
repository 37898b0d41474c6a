//! Request logging middleware.
//!
//! # Responsibilities
//! - Record method, path and raw query when a request starts
//! - Record response status and elapsed duration when it ends
//!
//! # Design Decisions
//! - Observes only: the wrapped handler's response passes through untouched
//! - Events are debug level; they surface in develop mode

use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log the start and end of every request.
///
/// Layered outermost, so the recorded duration covers the whole handler
/// stack and the status is the one actually written.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();

    tracing::debug!(method = %method, path = %path, query = %query, "Started request");

    let response = next.run(request).await;

    tracing::debug!(
        method = %method,
        path = %path,
        query = %query,
        status = response.status().as_u16(),
        duration = ?started.elapsed(),
        "End request"
    );

    response
}
