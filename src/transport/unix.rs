//! HTTP transport over a Unix domain socket.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use tokio::net::UnixStream;

use super::{Request, Response, Transport, TransportError};

/// HTTP/1 transport that dials a filesystem socket instead of TCP.
///
/// The request keeps the URL's host and port in its request line and
/// `Host` header, exactly as a reverse proxy in front of the socket
/// would present it; only the byte channel differs. Each call dials a
/// fresh connection that lives for that call only.
///
/// reqwest cannot dial filesystem sockets, so this channel drives a
/// hyper HTTP/1 client connection directly.
#[derive(Debug, Clone)]
pub struct UnixTransport {
    path: std::path::PathBuf,
}

impl UnixTransport {
    /// Creates a transport that connects to the given socket path.
    #[must_use]
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured socket path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Transport for UnixTransport {
    type Error = TransportError;

    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let socket_request = build_socket_request(request)?;

        let stream = UnixStream::connect(&self.path)
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?;

        let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?;

        // Drive the connection until the response has been read; errors it
        // hits surface through the send_request call below.
        tokio::spawn(async move {
            if let Err(error) = connection.await {
                tracing::debug!(%error, "socket connection ended with error");
            }
        });

        let response = sender
            .send_request(socket_request)
            .await
            .map_err(map_hyper_error)?;

        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(map_hyper_error)?
            .to_bytes()
            .to_vec();

        Ok(Response::new(parts.status, parts.headers, body))
    }
}

/// Converts a transport request into a hyper request in origin form.
///
/// The request target carries only path and query; the URL's authority
/// moves into the `Host` header.
fn build_socket_request(request: Request) -> Result<http::Request<Full<Bytes>>, TransportError> {
    let target = origin_form_target(&request.url);
    let authority = host_header_value(&request.url)?;

    let body = request.body.unwrap_or_default();
    let mut socket_request = http::Request::builder()
        .method(request.method)
        .uri(target)
        .header(http::header::HOST, authority)
        .body(Full::new(Bytes::from(body)))
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

    for (name, value) in &request.headers {
        socket_request.headers_mut().append(name, value.clone());
    }

    Ok(socket_request)
}

fn origin_form_target(url: &url::Url) -> String {
    let mut target = url.path().to_owned();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }
    target
}

fn host_header_value(url: &url::Url) -> Result<String, TransportError> {
    let host = url
        .host_str()
        .ok_or_else(|| TransportError::InvalidRequest(format!("URL has no host: {url}")))?;

    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}

fn map_hyper_error(error: hyper::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(Box::new(error))
    }
}
