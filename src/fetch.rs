// src/fetch.rs
use futures::StreamExt;
use reqwest::Client;
use std::io::{self, Write};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to download {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to write downloaded script: {0}")]
    Io(#[from] io::Error),
}

pub fn http_client() -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(FetchError::Client)
}

/// Downloads `url` into a fresh temporary file.
///
/// The file is removed when the returned handle is dropped. The content is
/// used as-is: no checksum, no retry, no timeout.
pub async fn fetch_script(client: &Client, url: &str) -> Result<NamedTempFile, FetchError> {
    let http_err = |source: reqwest::Error| FetchError::Http {
        url: url.to_string(),
        source,
    };

    info!(%url, "downloading analysis script");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(http_err)?;

    let mut file = tempfile::Builder::new()
        .prefix("run-clang-tidy-")
        .suffix(".py")
        .tempfile()?;

    let mut written = 0usize;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(http_err)?;
        file.write_all(&chunk)?;
        written += chunk.len();
    }
    file.flush()?;

    debug!(bytes = written, path = %file.path().display(), "script saved");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers exactly one request with `status` and `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/run-clang-tidy.py", addr)
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn writes_body_to_temp_file() {
        let url = serve_once("200 OK", "print('tidy')\n").await;
        let file = fetch_script(&local_client(), &url).await.unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "print('tidy')\n");
    }

    #[tokio::test]
    async fn temp_file_is_removed_on_drop() {
        let url = serve_once("200 OK", "pass\n").await;
        let file = fetch_script(&local_client(), &url).await.unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());
        drop(file);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn error_status_fails() {
        let url = serve_once("404 Not Found", "missing").await;
        let err = fetch_script(&local_client(), &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_fails() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = format!("http://{}/script.py", addr);
        assert!(fetch_script(&local_client(), &url).await.is_err());
    }
}
