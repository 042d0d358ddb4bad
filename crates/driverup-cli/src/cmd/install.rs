//! Install command

use driverup_core::Reporter;
use driverup_core::manifest::fetch_manifest;
use driverup_core::selector::select;
use driverup_schema::{Platform, UnsupportedPlatform};

use crate::ops::install::{InstallOutcome, install as install_record};
use crate::ops::{Context, InstallError};

/// Install the newest driver whose version starts with `prefix` (or the
/// latest overall) and make it active.
///
/// `detect` resolves the host platform. It runs only after a version has
/// been selected, so an unknown prefix is reported even on unsupported hosts.
pub async fn install<F>(
    ctx: &Context,
    prefix: Option<&str>,
    detect: F,
) -> Result<InstallOutcome, InstallError>
where
    F: FnOnce() -> Result<Platform, UnsupportedPlatform>,
{
    ctx.reporter.section("Fetching versions");
    let records = fetch_manifest(&ctx.client, &ctx.config.manifest_url).await?;

    let record = select(&records, prefix).ok_or_else(|| InstallError::VersionNotFound {
        prefix: prefix.unwrap_or("latest").to_string(),
    })?;
    tracing::info!(version = %record.version, revision = %record.revision, "selected version");

    let platform = detect()?;

    ctx.reporter
        .section(&format!("Installing chromedriver {}", record.version));
    let outcome = match install_record(ctx, record, &platform).await {
        Ok(outcome) => outcome,
        Err(e) => {
            ctx.reporter.failed(&record.version, "install failed");
            return Err(e);
        }
    };

    let detail = if outcome.fresh {
        format!("installed -> {}", outcome.link.display())
    } else {
        format!("already installed, linked -> {}", outcome.link.display())
    };
    ctx.reporter.done(&outcome.version, &detail);

    Ok(outcome)
}
