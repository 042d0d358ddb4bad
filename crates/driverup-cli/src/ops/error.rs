//! Domain-specific errors for install runs

use crate::ExitStatus;
use driverup_core::io::download::DownloadError;
use driverup_core::io::extract::ExtractError;
use driverup_core::manifest::ManifestError;
use driverup_schema::UnsupportedPlatform;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Chromedriver version not found: {prefix}")]
    VersionNotFound { prefix: String },

    #[error(transparent)]
    UnsupportedPlatform(#[from] UnsupportedPlatform),

    #[error("Chromedriver {version} has no build for platform {platform}")]
    DownloadEntryNotFound { version: String, platform: String },

    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("{context}: {source}")]
    Filesystem {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Wrap an IO error with what was being attempted.
    pub fn fs(context: &'static str, source: std::io::Error) -> Self {
        Self::Filesystem { context, source }
    }

    /// Exit status the process should terminate with.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::VersionNotFound { .. } => ExitStatus::VersionNotFound,
            Self::UnsupportedPlatform(_) => ExitStatus::UnsupportedPlatform,
            _ => ExitStatus::Failure,
        }
    }
}
