//! Serves real TCP connections through the hyper loop.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use quote_api::router::Router;
use quote_api::server::serve_listener;
use quote_store::QuoteStore;

async fn raw_request(addr: SocketAddr, request: &str) -> (String, serde_json::Value) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status_line = head.lines().next().unwrap().to_string();
    (status_line, serde_json::from_str(body).unwrap())
}

#[tokio::test]
async fn test_serves_over_tcp_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Arc::new(Router::new(Arc::new(QuoteStore::new())));

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve_listener(listener, router, async move {
        let _ = shutdown_rx.await;
    }));

    let (status, body) = raw_request(
        addr,
        "GET /quotes/2 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(status.starts_with("HTTP/1.1 200"), "{}", status);
    assert_eq!(body["author"], "Will Rogers");

    let payload = r#"{"text":"Over the wire","author":"Socket"}"#;
    let request = format!(
        "POST /quotes HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    let (status, body) = raw_request(addr, &request).await;
    assert!(status.starts_with("HTTP/1.1 201"), "{}", status);
    assert_eq!(body["id"], 3);

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
