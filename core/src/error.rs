//! Error types for the movie API client.
//!
//! # Design
//! Application-level failures (a 404 or 409 with an `{"error": ...}` body) are
//! not errors here: they come back as `ApiResponse::Error` values. `ApiError`
//! only covers what the server's contract cannot express: the request never
//! completed, a payload could not be encoded, or a body did not have the
//! expected shape.

use thiserror::Error;

/// Errors returned by `MovieClient` parse methods and the transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP exchange itself failed (connection refused, DNS, I/O).
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization of HTTP {status} body failed: {source}")]
    Deserialization {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A non-2xx response whose body is not an error object.
    #[error("unexpected HTTP {status}: {body}")]
    UnexpectedResponse { status: u16, body: String },
}
