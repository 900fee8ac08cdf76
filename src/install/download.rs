//! Streaming installer download.

use crate::InstallError;
use async_trait::async_trait;
use futures::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, warn};

/// Fetches a URL into a local file.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Stream the body of `url` into a newly created (or truncated) file at
    /// `path`, returning the number of bytes written.
    ///
    /// One attempt only; partial downloads are never resumed.
    async fn stream_to_file(&self, url: &str, path: &Path) -> Result<u64, InstallError>;
}

/// [`Downloader`] backed by `reqwest`.
///
/// Redirects are followed, which the `aka.ms` installer links rely on.
#[derive(Debug, Clone, Default)]
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxy, custom TLS roots, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn stream_to_file(&self, url: &str, path: &Path) -> Result<u64, InstallError> {
        debug!(url, path = %path.display(), "starting download");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| InstallError::network(url, e.to_string(), e.status().map(|s| s.as_u16())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::network(url, format!("HTTP {status}"), Some(status.as_u16())));
        }

        let file = File::create(path)
            .await
            .map_err(|e| InstallError::file_system(path, &e))?;
        let mut writer = BufWriter::new(file);
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        let result = async {
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| InstallError::network(url, e.to_string(), None))?;
                writer
                    .write_all(&chunk)
                    .await
                    .map_err(|e| InstallError::file_system(path, &e))?;
                written += chunk.len() as u64;
            }
            writer.flush().await.map_err(|e| InstallError::file_system(path, &e))
        }
        .await;

        if let Err(e) = result {
            drop(writer);
            if let Err(rm) = tokio::fs::remove_file(path).await {
                warn!(path = %path.display(), error = %rm, "failed to remove partial download");
            }
            return Err(e);
        }

        debug!(url, bytes = written, "download complete");
        Ok(written)
    }
}
