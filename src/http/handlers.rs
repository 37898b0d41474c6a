//! Request handlers.
//!
//! # Responsibilities
//! - Restrict the route to the GET method
//! - Extract the `s` query parameter
//! - Apply the transform and wrap the result in the response envelope

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use thiserror::Error;

use crate::http::response::{write_envelope, Envelope};
use crate::transform::capitalize_words;

/// Query parameter holding the text to capitalize.
const QUERY_PARAM: &str = "s";

/// Client input failures surfaced as HTTP 400 envelopes.
///
/// The `Display` output is exactly the text sent back to the client. These
/// are never logged as failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The route only serves GET.
    #[error("{path} only supports the GET method")]
    MethodNotAllowed { path: String },

    /// The `s` query parameter was missing or empty.
    #[error("{path} expects a query parameter s to be present")]
    MissingQueryParam { path: String },
}

/// Handler for every path.
///
/// Validates the method and the `s` query parameter, capitalizes the text,
/// and writes the JSON envelope.
pub async fn capitalize_handler(request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();

    if request.method() != Method::GET {
        let error = RequestError::MethodNotAllowed { path };
        return write_envelope(&Envelope::error(error), StatusCode::BAD_REQUEST);
    }

    match query_param(request.uri().query(), QUERY_PARAM) {
        Some(text) if !text.is_empty() => {
            let envelope = Envelope::message(capitalize_words(&text));
            write_envelope(&envelope, StatusCode::OK)
        }
        _ => {
            let error = RequestError::MissingQueryParam { path };
            write_envelope(&Envelope::error(error), StatusCode::BAD_REQUEST)
        }
    }
}

/// First value of `name` in the raw query string, percent-decoded.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
