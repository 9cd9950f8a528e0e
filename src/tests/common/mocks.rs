use tokio::io::{ AsyncReadExt, AsyncWriteExt };
use tokio::net::TcpListener;
use crate::api::PostsClient;

/// Answers exactly one HTTP request with a canned response.
pub struct StubServer {
    pub url: String,
}

impl StubServer {
    pub async fn respond(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { url: format!("http://{}/posts", addr) }
    }

    pub async fn ok_json(body: &str) -> Self {
        Self::respond("200 OK", body).await
    }
}

/// A URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/posts", addr)
}

/// Client that ignores proxy settings from the environment, so requests to
/// the stub go straight to localhost.
pub fn direct_client(url: impl Into<String>) -> PostsClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    PostsClient::with_client(http, url)
}
