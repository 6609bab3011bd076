//! Tests for `UnixTransport`.

use super::test_server;
use super::{Request, Transport, TransportError, UnixTransport};

mod construction {
    use super::*;

    #[test]
    fn new_stores_socket_path() {
        let transport = UnixTransport::new("/tmp/receiver.sock");

        assert_eq!(transport.path(), std::path::Path::new("/tmp/receiver.sock"));
    }

    #[test]
    fn debug_format_is_readable() {
        let transport = UnixTransport::new("/tmp/receiver.sock");
        let debug = format!("{transport:?}");

        assert!(debug.contains("UnixTransport"));
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnixTransport>();
    }
}

mod socket_roundtrip {
    use super::*;

    #[tokio::test]
    async fn delivers_request_over_socket() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("receiver.sock");
        let server = test_server::one_shot_unix(&socket);

        let url = url::Url::parse("http://127.0.0.1:8443/hook").unwrap();
        let request = Request::post(url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(b"{\"update_id\":1}".to_vec());

        let response = UnixTransport::new(&socket).send(request).await.unwrap();

        assert_eq!(response.status, http::StatusCode::OK);
        assert_eq!(response.body, b"ok".to_vec());

        let received = String::from_utf8(server.await.unwrap()).unwrap();
        assert!(received.starts_with("POST /hook HTTP/1.1\r\n"));
        assert!(received.ends_with("{\"update_id\":1}"));
    }

    #[tokio::test]
    async fn request_line_keeps_origin_form_with_query() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("receiver.sock");
        let server = test_server::one_shot_unix(&socket);

        let url = url::Url::parse("http://127.0.0.1:8443/hook?probe=1").unwrap();
        UnixTransport::new(&socket)
            .send(Request::get(url))
            .await
            .unwrap();

        let received = String::from_utf8(server.await.unwrap()).unwrap();
        assert!(received.starts_with("GET /hook?probe=1 HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn host_header_carries_url_authority() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("receiver.sock");
        let server = test_server::one_shot_unix(&socket);

        let url = url::Url::parse("http://127.0.0.1:8443/hook").unwrap();
        UnixTransport::new(&socket)
            .send(Request::get(url))
            .await
            .unwrap();

        let received = String::from_utf8(server.await.unwrap()).unwrap();
        assert!(received.to_lowercase().contains("host: 127.0.0.1:8443"));
    }

    #[tokio::test]
    async fn missing_socket_maps_to_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("never-bound.sock");

        let url = url::Url::parse("http://127.0.0.1:8443/").unwrap();
        let result = UnixTransport::new(&socket).send(Request::get(url)).await;

        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    #[tokio::test]
    async fn url_without_host_is_rejected_before_dialing() {
        let transport = UnixTransport::new("/tmp/never-dialed.sock");
        let url = url::Url::parse("data:text/plain,hello").unwrap();

        let result = transport.send(Request::get(url)).await;

        assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
    }
}
