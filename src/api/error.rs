//! Error types for platform API operations.

use thiserror::Error;

/// Errors that can occur while talking to the platform API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body was not the JSON the schema expects.
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response declared a schema version this client does not speak.
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersion {
        /// Version this client implements.
        expected: u32,
        /// Version the server reported.
        found: u32,
    },
}
