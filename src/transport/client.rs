//! Production TCP transport implementation using reqwest.

use std::time::Duration;

use super::{Request, Response, Transport, TransportError};

/// Production HTTP transport using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements the
/// [`Transport`] trait. Redirects are not followed and requests time out
/// after [`Self::DEFAULT_TIMEOUT`], so a probe observes the receiver's
/// immediate behavior rather than whatever a redirect chain leads to.
///
/// # Example
///
/// ```no_run
/// use botgate::transport::{ReqwestTransport, Transport, Request};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new();
/// let url = Url::parse("http://127.0.0.1:8080/webhook")?;
/// let request = Request::post(url).with_body(b"{}".to_vec());
/// let response = transport.send(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new transport with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        let inner = reqwest::Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("static client configuration is valid");
        Self { inner }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, proxies, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    type Error = TransportError;

    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        // Build the reqwest request
        let mut builder = self.inner.request(request.method, request.url.as_str());

        // Add headers
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        // Add body if present
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        // Send the request
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_builder() {
                TransportError::InvalidRequest(e.to_string())
            } else {
                TransportError::Connection(Box::new(e))
            }
        })?;

        // Extract response parts
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}
