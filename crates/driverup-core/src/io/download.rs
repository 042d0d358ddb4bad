//! Archive download.
//!
//! Streams a single GET response to disk, reporting progress as chunks
//! arrive. No checksum is available in the manifest, so none is checked.

use std::path::Path;

use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::Reporter;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Download `url` into `dest`, returning the number of bytes written.
///
/// `version` is only used to label progress updates.
pub async fn download_file<R: Reporter>(
    client: &Client,
    url: &str,
    dest: &Path,
    version: &str,
    reporter: &R,
) -> Result<u64, DownloadError> {
    debug!(url, dest = %dest.display(), "downloading archive");

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    let total_size = response.content_length();
    reporter.downloading(version, 0, total_size);

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        reporter.downloading(version, downloaded, total_size);
    }

    file.flush().await?;

    debug!(bytes = downloaded, "archive downloaded");
    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullReporter;
    use mockito::Server;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_download_writes_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/driver.zip")
            .with_status(200)
            .with_body(b"archive-bytes")
            .expect(1)
            .create_async()
            .await;

        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("driver.zip");
        let url = format!("{}/driver.zip", server.url());

        let written = download_file(&Client::new(), &url, &dest, "120.0.2", &NullReporter)
            .await
            .unwrap();

        assert_eq!(written, 13);
        assert_eq!(std::fs::read(&dest).unwrap(), b"archive-bytes");
    }

    #[tokio::test]
    async fn test_download_http_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/missing.zip")
            .with_status(500)
            .create_async()
            .await;

        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("missing.zip");
        let url = format!("{}/missing.zip", server.url());

        let err = download_file(&Client::new(), &url, &dest, "120.0.2", &NullReporter)
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Http(_)));
        assert!(!dest.exists());
    }
}
