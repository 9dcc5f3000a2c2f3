//! End-to-end test for the portal server over a real socket.
//!
//! Binds an ephemeral port rather than the fixed production port so the
//! test can run alongside a local server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use edutrack::web::create_router;

#[tokio::test]
async fn serves_login_page_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router()).await.unwrap();
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    let response = String::from_utf8_lossy(&response);

    assert!(response.starts_with("HTTP/1.1 200 OK"), "got: {response}");

    let body = response.split("\r\n\r\n").nth(1).unwrap_or_default();
    assert!(!body.is_empty());
    assert!(body.contains("EduTrack"));
}
