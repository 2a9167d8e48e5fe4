//! Upstream that announces a longer body than it sends, then hangs up.
#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::socket_guard::bind_local_or_skip;

const TRUNCATED_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Type: text/html\r\n\
Content-Length: 4096\r\n\
Connection: close\r\n\
\r\n\
<html><body><table class=\"c\"><tr><td>cut";

/// Spawns the truncating upstream and returns its base URL, or `None` when
/// sockets are unavailable.
pub async fn spawn_truncated_body_server() -> Option<String> {
    let listener = bind_local_or_skip().await?;
    let addr = listener.local_addr().ok()?;

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(answer_truncated(socket));
        }
    });

    Some(format!("http://{addr}"))
}

async fn answer_truncated(mut socket: TcpStream) {
    // Closing with unread request bytes resets the connection, so read the
    // whole request head before answering.
    let mut request = Vec::new();
    let mut buf = [0_u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    if socket.write_all(TRUNCATED_RESPONSE).await.is_ok() {
        let _ = socket.shutdown().await;
    }
}
