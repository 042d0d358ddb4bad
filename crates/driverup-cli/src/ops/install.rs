//! Driver installation.
//!
//! Handles the complete lifecycle of installing one manifest record:
//! - Locating the build for the host platform
//! - Downloading and extracting the archive (skipped if already installed)
//! - Copying the driver into `~/bin/chromedrivers/chromedriver-<revision>`
//! - Republishing `~/bin/chromedriver`
//!
//! The installed binary is the only persisted state: if it exists, the
//! revision is installed. It is written under a temporary name and renamed
//! into place, so an interrupted run never leaves a half-written binary that
//! a later run would mistake for a finished install. The active link is
//! replaced last, after every fallible download and filesystem step.

use std::fs;
use std::path::{Path, PathBuf};

use driverup_core::Reporter;
use driverup_core::io::download::download_file;
use driverup_core::io::extract::{extract_zip, locate};
use driverup_schema::{DownloadEntry, Platform, VersionRecord};
use tracing::{debug, info};

use crate::ops::{Context, InstallError, link};

/// Permission bits for installed binaries: owner and group rwx.
#[cfg(unix)]
const BINARY_MODE: u32 = 0o770;

/// Result of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub version: String,
    pub revision: String,
    /// Absolute path of the installed binary.
    pub binary: PathBuf,
    /// Fixed path now naming the installed binary.
    pub link: PathBuf,
    /// `false` when the revision was already on disk and nothing was downloaded.
    pub fresh: bool,
}

/// Install `record` for `platform` and make it the active driver.
pub async fn install(
    ctx: &Context,
    record: &VersionRecord,
    platform: &Platform,
) -> Result<InstallOutcome, InstallError> {
    let config = &ctx.config;

    fs::create_dir_all(&config.drivers_dir)
        .map_err(|e| InstallError::fs("Failed to create drivers directory", e))?;

    let entry = record
        .driver_download(platform.id)
        .ok_or_else(|| InstallError::DownloadEntryNotFound {
            version: record.version.clone(),
            platform: platform.id.to_string(),
        })?;

    let binary = config.installed_binary_path(record);
    let fresh = if binary.exists() {
        info!(revision = %record.revision, "revision already installed, skipping download");
        false
    } else {
        fetch_and_unpack(ctx, record, entry, platform, &binary).await?;
        true
    };

    let link_path = config.link_path(platform);
    link::publish(platform.link, &binary, &link_path)?;
    info!(link = %link_path.display(), binary = %binary.display(), "driver published");

    Ok(InstallOutcome {
        version: record.version.clone(),
        revision: record.revision.clone(),
        binary,
        link: link_path,
        fresh,
    })
}

/// Download, extract and install the binary for one revision.
async fn fetch_and_unpack(
    ctx: &Context,
    record: &VersionRecord,
    entry: &DownloadEntry,
    platform: &Platform,
    binary: &Path,
) -> Result<(), InstallError> {
    let drivers_dir = &ctx.config.drivers_dir;
    let archive = ctx.config.archive_path(record);

    download_file(
        &ctx.client,
        &entry.url,
        &archive,
        &record.version,
        &ctx.reporter,
    )
    .await?;

    ctx.reporter.extracting(&record.version);
    let files = extract_zip(&archive, drivers_dir)?;
    let extracted = locate(&files, &platform.extracted_executable())?;

    let staging = binary.with_file_name(format!("{}.partial", record.installed_binary_name()));
    debug!(from = %extracted.display(), to = %binary.display(), "installing driver binary");

    fs::copy(&extracted, &staging)
        .map_err(|e| InstallError::fs("Failed to copy extracted driver", e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&staging, fs::Permissions::from_mode(BINARY_MODE))
            .map_err(|e| InstallError::fs("Failed to set driver permissions", e))?;
    }

    fs::rename(&staging, binary)
        .map_err(|e| InstallError::fs("Failed to move driver into place", e))?;

    Ok(())
}
