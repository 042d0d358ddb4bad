//! List command

use std::io::Write;

use anyhow::{Context as _, Result};
use driverup_core::manifest::fetch_manifest;
use driverup_core::selector::list_versions;

use crate::ops::Context;

/// Print known versions, one per line, followed by a blank line.
///
/// A `limit` of zero or below lists every version.
pub async fn list<W: Write>(ctx: &Context, limit: i64, out: &mut W) -> Result<()> {
    let records = fetch_manifest(&ctx.client, &ctx.config.manifest_url).await?;
    let limit = usize::try_from(limit).unwrap_or(0);

    for version in list_versions(&records, limit) {
        writeln!(out, "{version}").context("Failed to write version list")?;
    }
    writeln!(out).context("Failed to write version list")?;

    Ok(())
}
