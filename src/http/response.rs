//! Response envelope and serialization.
//!
//! # Responsibilities
//! - Define the JSON envelope shape shared by every response
//! - Serialize envelopes with the JSON content type and a CRLF terminator
//! - Recover from serialization failures without recursing

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use serde::Serialize;

/// JSON envelope carried by every response.
///
/// At most one field is populated; absent fields are omitted from the wire
/// entirely rather than sent as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Envelope {
    /// Successful result text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// Human-readable error text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// Envelope carrying a successful result.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            error: None,
        }
    }

    /// Envelope carrying an error description.
    pub fn error(error: impl std::fmt::Display) -> Self {
        Self {
            msg: None,
            error: Some(error.to_string()),
        }
    }
}

/// Fixed body emitted when envelope serialization fails. A literal, so the
/// recovery path cannot itself fail to serialize.
const SERIALIZE_FAILURE_BODY: &str =
    "{\"error\":\"could not serialize response into a json object\"}\r\n";

/// Serialize `envelope` into a response with the given status.
///
/// Bodies are JSON terminated with CRLF. A serialization failure downgrades
/// the response to a 500 with a fixed error body.
pub fn write_envelope(envelope: &Envelope, status: StatusCode) -> Response {
    match serde_json::to_string(envelope) {
        Ok(mut body) => {
            body.push_str("\r\n");
            json_response(status, Body::from(body))
        }
        Err(error) => {
            tracing::error!(error = %error, "Could not serialize response into a json object");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Body::from(SERIALIZE_FAILURE_BODY),
            )
        }
    }
}

fn json_response(status: StatusCode, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope_omits_error_field() {
        let envelope = Envelope::message("Hello");
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            "{\"msg\":\"Hello\"}"
        );
    }

    #[test]
    fn test_error_envelope_omits_message_field() {
        let envelope = Envelope::error("boom");
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            "{\"error\":\"boom\"}"
        );
    }

    #[tokio::test]
    async fn test_write_envelope_sets_headers_and_crlf() {
        let response = write_envelope(&Envelope::message("Hi"), StatusCode::OK);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(bytes.as_ref(), b"{\"msg\":\"Hi\"}\r\n");
    }
}
