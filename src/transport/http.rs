//! HTTP request/response types and the transport trait.

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`Transport`] implementation. It uses standard `http` crate types
/// for method and headers, ensuring compatibility with the broader ecosystem.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a new request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response received from a server.
///
/// Contains the status code, headers, and body of the response.
/// The body is fully buffered into memory.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for issuing HTTP requests.
///
/// # Design
///
/// This trait abstracts the channel a request travels over, enabling:
/// - Dependency injection for testing with mock transports
/// - Swapping channels (TCP, Unix domain socket) without changing calling code
/// - Adding cross-cutting concerns (gating, failure suppression) via decorators
///
/// The error type is associated rather than fixed so a decorator can widen
/// the inner transport's error with its own failure modes.
///
/// # Example
///
/// ```ignore
/// use botgate::transport::{Request, Response, Transport, TransportError};
///
/// struct MockTransport {
///     response: Response,
/// }
///
/// impl Transport for MockTransport {
///     type Error = TransportError;
///
///     async fn send(&self, _request: Request) -> Result<Response, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Error type produced when a request cannot be completed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends an HTTP request and returns the response.
    ///
    /// # Arguments
    ///
    /// * `request` - The HTTP request to send
    ///
    /// # Returns
    ///
    /// The HTTP response on success, or `Self::Error` on failure.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the request cannot be delivered or the
    /// response cannot be read.
    fn send(
        &self,
        request: Request,
    ) -> impl std::future::Future<Output = Result<Response, Self::Error>> + Send;
}
