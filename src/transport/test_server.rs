//! One-shot loopback servers for exercising transports end to end.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UnixListener};
use tokio::task::JoinHandle;

/// Canned HTTP/1.1 response every one-shot server replies with.
pub const CANNED_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok";

/// Binds a loopback TCP listener and serves exactly one connection.
///
/// Returns the bound port and a handle resolving to the raw bytes the
/// client sent.
pub async fn one_shot_tcp() -> (u16, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let port = listener.local_addr().expect("listener address").port();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept connection");
        let received = read_http_request(&mut stream).await;
        stream.write_all(CANNED_RESPONSE).await.expect("write response");
        stream.flush().await.expect("flush response");
        received
    });

    (port, handle)
}

/// Binds a Unix-domain listener at `path` and serves exactly one
/// connection, like [`one_shot_tcp`].
pub fn one_shot_unix(path: &std::path::Path) -> JoinHandle<Vec<u8>> {
    let listener = UnixListener::bind(path).expect("bind unix listener");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept connection");
        let received = read_http_request(&mut stream).await;
        stream.write_all(CANNED_RESPONSE).await.expect("write response");
        stream.flush().await.expect("flush response");
        received
    })
}

/// Reads one HTTP request: the header section, then as many body bytes
/// as its content-length header declares.
async fn read_http_request<S: AsyncRead + Unpin>(stream: &mut S) -> Vec<u8> {
    let mut received = Vec::new();
    let mut buf = [0_u8; 1024];

    loop {
        if expected_len(&received).is_some_and(|total| received.len() >= total) {
            break;
        }

        let n = stream.read(&mut buf).await.expect("read request bytes");
        assert!(n > 0, "peer closed before the request was complete");
        received.extend_from_slice(&buf[..n]);
    }

    received
}

fn expected_len(received: &[u8]) -> Option<usize> {
    let text = String::from_utf8_lossy(received);
    let header_end = text.find("\r\n\r\n")? + 4;
    Some(header_end + declared_body_len(&text))
}

fn declared_body_len(text: &str) -> usize {
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
