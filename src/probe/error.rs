//! Error types for webhook probes.

use thiserror::Error;

use crate::transport::TransportError;

/// Error type for building and sending a webhook probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The configured host, port, and path do not form a valid URL.
    #[error("Invalid probe URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured header value contains characters HTTP forbids.
    #[error("Invalid value for header {name}: {source}")]
    Header {
        /// Name of the offending header.
        name: http::HeaderName,
        /// Underlying validation failure.
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// The underlying channel failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
