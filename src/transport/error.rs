//! Error types for transport operations.

use thiserror::Error;

/// Error type for transport operations.
///
/// Describes what went wrong at the channel level without dictating
/// recovery strategy. Classification of these errors happens in the
/// fault layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// socket dial failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built or is malformed.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
