//! Manifest client.
//!
//! Performs a live GET of the version manifest on every call; there is no
//! local cache. Transport failures and non-success statuses are reported as
//! [`ManifestError::Network`], undecodable bodies as [`ManifestError::Format`].

use driverup_schema::{Manifest, VersionRecord};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to fetch version manifest: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed version manifest: {0}")]
    Format(#[from] serde_json::Error),
}

/// Fetch the manifest at `url` and return its records, oldest first.
pub async fn fetch_manifest(client: &Client, url: &str) -> Result<Vec<VersionRecord>, ManifestError> {
    debug!(url, "fetching version manifest");

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    let body = response.bytes().await?;
    let manifest: Manifest = serde_json::from_slice(&body)?;

    debug!(count = manifest.versions.len(), "parsed version manifest");
    Ok(manifest.versions)
}
