//! Tests for `ReqwestTransport`.

use std::time::Duration;

use super::test_server;
use super::{Request, ReqwestTransport, Transport, TransportError};

mod construction {
    use super::*;

    #[test]
    fn new_creates_transport() {
        let transport = ReqwestTransport::new();
        let debug = format!("{transport:?}");

        assert!(debug.contains("ReqwestTransport"));
    }

    #[test]
    fn default_creates_same_as_new() {
        let transport1 = ReqwestTransport::new();
        let transport2 = ReqwestTransport::default();

        // Both should be functional (no panic)
        let _ = format!("{transport1:?}");
        let _ = format!("{transport2:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let transport = ReqwestTransport::from_client(custom);

        let _ = format!("{transport:?}");
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }
}

mod loopback {
    use super::*;

    #[tokio::test]
    async fn delivers_request_and_returns_response() {
        let (port, server) = test_server::one_shot_tcp().await;
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/hook")).unwrap();
        let request = Request::post(url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(b"{\"update_id\":1}".to_vec());

        let response = ReqwestTransport::new().send(request).await.unwrap();

        assert_eq!(response.status, http::StatusCode::OK);
        assert_eq!(response.body, b"ok".to_vec());

        let received = String::from_utf8(server.await.unwrap()).unwrap();
        assert!(received.starts_with("POST /hook HTTP/1.1\r\n"));
        assert!(received.to_lowercase().contains("content-type: application/json"));
        assert!(received.ends_with("{\"update_id\":1}"));
    }

    #[tokio::test]
    async fn connection_refused_maps_to_connection_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        let result = ReqwestTransport::new().send(Request::get(url)).await;

        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    #[tokio::test]
    async fn stalled_server_maps_to_timeout_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        // Accept the connection but never respond.
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(stream);
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let transport = ReqwestTransport::from_client(client);
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();

        let result = transport.send(Request::get(url)).await;

        assert!(matches!(result, Err(TransportError::Timeout)));
    }
}
