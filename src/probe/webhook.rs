//! Synthetic webhook delivery requests.

use crate::transport::{Request, ReqwestTransport, Response, Transport, UnixTransport};

use super::ProbeError;

/// How the probe declares the length of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentLength {
    /// Declare the payload's actual byte length.
    #[default]
    Computed,
    /// Declare exactly this many bytes, even if the payload disagrees.
    /// Lets a test check how the receiver treats inconsistent framing.
    Declared(u64),
    /// Do not declare a length at all.
    Omit,
}

/// One synthetic HTTP request emulating an inbound webhook delivery.
///
/// Built fluently, then sent with [`Self::send`] to exercise a locally
/// running webhook receiver end-to-end. Defaults mirror what the bot API
/// server itself sends: POST, `application/json`, computed length, no
/// secret token.
///
/// # Example
///
/// ```no_run
/// use botgate::probe::WebhookProbe;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = WebhookProbe::new("127.0.0.1", 8443)
///     .with_path("webhook")
///     .with_payload(r#"{"update_id": 1}"#)
///     .with_secret_token("secret")
///     .send()
///     .await?;
/// assert!(response.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookProbe {
    host: String,
    port: u16,
    url_path: String,
    payload: Option<String>,
    content_length: ContentLength,
    content_type: String,
    method: http::Method,
    secret_token: Option<String>,
    unix_socket: Option<std::path::PathBuf>,
}

impl WebhookProbe {
    /// Content type declared when none is configured.
    pub const DEFAULT_CONTENT_TYPE: &'static str = "application/json";

    /// Header carrying the webhook secret token.
    pub const SECRET_TOKEN_HEADER: http::HeaderName =
        http::HeaderName::from_static("x-telegram-bot-api-secret-token");

    /// Creates a probe for the receiver at `host:port` with default
    /// settings.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            url_path: String::new(),
            payload: None,
            content_length: ContentLength::Computed,
            content_type: Self::DEFAULT_CONTENT_TYPE.to_string(),
            method: http::Method::POST,
            secret_token: None,
            unix_socket: None,
        }
    }

    /// Sets the URL path the delivery targets.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.url_path = path.into();
        self
    }

    /// Sets the payload text carried in the request body.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Sets how the payload length is declared.
    #[must_use]
    pub const fn with_content_length(mut self, content_length: ContentLength) -> Self {
        self.content_length = content_length;
        self
    }

    /// Sets the declared content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: http::Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the secret token the delivery authenticates with.
    #[must_use]
    pub fn with_secret_token(mut self, token: impl Into<String>) -> Self {
        self.secret_token = Some(token.into());
        self
    }

    /// Routes the delivery over the filesystem socket at `path` instead
    /// of TCP. The request line and `Host` header still carry the
    /// configured host and port.
    #[must_use]
    pub fn with_unix_socket(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.unix_socket = Some(path.into());
        self
    }

    /// Returns the configured HTTP method.
    #[must_use]
    pub const fn method(&self) -> &http::Method {
        &self.method
    }

    /// Returns the configured payload text.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Builds the delivery request without sending it.
    ///
    /// The target URL is `http://{host}:{port}/{path}`. The content type
    /// is always declared; the secret-token header only when a token was
    /// configured. The length declaration follows [`ContentLength`],
    /// except that an absent or empty payload sends no body and no
    /// length, whatever the configured mode.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Url`] when host, port, and path do not form
    /// a valid URL, and [`ProbeError::Header`] when a configured value
    /// contains characters HTTP forbids.
    pub fn build_request(&self) -> Result<Request, ProbeError> {
        let url = url::Url::parse(&format!(
            "http://{}:{}/{}",
            self.host, self.port, self.url_path
        ))?;

        let mut request = Request::new(self.method.clone(), url);
        request.headers.insert(
            http::header::CONTENT_TYPE,
            header_value(http::header::CONTENT_TYPE, &self.content_type)?,
        );

        if let Some(token) = &self.secret_token {
            request.headers.insert(
                Self::SECRET_TOKEN_HEADER,
                header_value(Self::SECRET_TOKEN_HEADER, token)?,
            );
        }

        if let Some(payload) = self.payload.as_deref().filter(|p| !p.is_empty()) {
            if let Some(length) = self.content_length_value(payload) {
                request.headers.insert(http::header::CONTENT_LENGTH, length);
            }
            request.body = Some(payload.as_bytes().to_vec());
        }

        Ok(request)
    }

    /// Sends the delivery and returns the receiver's raw response.
    ///
    /// Exactly one request is issued, over the configured filesystem
    /// socket if one was set and over TCP otherwise. The connection
    /// lives only for this call. No retries, no body parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the request cannot be built or the
    /// channel fails.
    pub async fn send(&self) -> Result<Response, ProbeError> {
        let request = self.build_request()?;
        tracing::debug!(method = %request.method, url = %request.url, "sending webhook probe");

        let response = match &self.unix_socket {
            Some(path) => UnixTransport::new(path).send(request).await?,
            None => ReqwestTransport::new().send(request).await?,
        };

        Ok(response)
    }

    fn content_length_value(&self, payload: &str) -> Option<http::HeaderValue> {
        match self.content_length {
            ContentLength::Computed => Some(http::HeaderValue::from(payload.len())),
            ContentLength::Declared(length) => Some(http::HeaderValue::from(length)),
            ContentLength::Omit => None,
        }
    }
}

fn header_value(name: http::HeaderName, value: &str) -> Result<http::HeaderValue, ProbeError> {
    http::HeaderValue::from_str(value).map_err(|source| ProbeError::Header { name, source })
}
