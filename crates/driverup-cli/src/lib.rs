//! driverup - keep a local ChromeDriver current
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Fetches the Chrome for Testing manifest, picks a release by version
//! prefix, installs its driver under `~/bin/chromedrivers`, and points
//! `~/bin/chromedriver` at it.
//!
//! # Directory Layout
//!
//! ```text
//! ~/bin/
//! ├── chromedriver         # Active driver (symlink, or copy on Windows)
//! └── chromedrivers/       # One binary per revision, plus downloaded archives
//! ```
//!
//! # Exit statuses
//!
//! See [`ExitStatus`]: version-not-found and unsupported-platform each have
//! their own code so scripts can tell them apart from transient failures.

pub mod cmd;
pub mod ops;
pub mod ui;

pub use driverup_core::paths::*;

use clap::Parser;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "driverup")]
#[command(
    author,
    version,
    about = "Install or update ChromeDriver from the Chrome for Testing manifest"
)]
pub struct Cli {
    /// Version prefix to install (e.g. 120 or 120.0.6099); latest when omitted
    #[arg(value_name = "VERSION_PREFIX", conflicts_with = "list")]
    pub prefix: Option<String>,

    /// List known versions; with LIMIT > 0, list the LIMIT newest except the very latest
    #[arg(long, value_name = "LIMIT", num_args = 0..=1, allow_negative_numbers = true)]
    pub list: Option<Option<i64>>,
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// No manifest version matches the requested prefix.
    VersionNotFound,
    /// No driver build exists for this OS/architecture.
    UnsupportedPlatform,
    /// Network, manifest, filesystem or usage failure.
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::VersionNotFound => 1,
            Self::UnsupportedPlatform => 2,
            Self::Failure => 3,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
