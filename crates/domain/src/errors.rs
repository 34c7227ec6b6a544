//! Error types used throughout the client library

use thiserror::Error;

/// Main error type for ITM API operations
#[derive(Error, Debug)]
pub enum ItmError {
    /// Request construction, connection, TLS, or body-read failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid base URL, request path, or builder input.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request body failed to serialize to JSON.
    #[error("JSON encode error: {0}")]
    Encode(String),

    /// A response body failed to deserialize into the expected type.
    #[error("JSON decode error: {0}")]
    Decode(String),

    /// The server answered with a status code outside the operation's
    /// contract. Carries the raw body for diagnostics.
    #[error("Unexpected HTTP status: expected {expected}, got {got}. Body: {body}")]
    UnexpectedStatus {
        /// Status code the operation's contract documents.
        expected: u16,
        /// Status code the server actually returned.
        got: u16,
        /// Raw response body, lossily decoded for display.
        body: String,
    },
}

/// Result type alias for ITM operations
pub type Result<T> = std::result::Result<T, ItmError>;
