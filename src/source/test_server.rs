//! One-shot local HTTP server for download tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answer a single request with `status` and `body`; returns the url to fetch.
pub async fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Error binding test listener");
    let addr = listener.local_addr().expect("Error reading listener address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Error accepting connection");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        // read the request head before answering
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Error writing response");
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/pub/networks.local")
}
