use dirs::home_dir;
use driverup_schema::{Platform, VersionRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Published location of the Chrome for Testing manifest.
pub const MANIFEST_URL: &str =
    "https://googlechromelabs.github.io/chrome-for-testing/known-good-versions-with-downloads.json";

/// Name of the directory under `bin/` holding every installed revision.
pub const DRIVERS_DIR_NAME: &str = "chromedrivers";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHome,
}

/// Install layout and remote endpoints, built once at startup.
///
/// ```text
/// ~/bin/
/// ├── chromedriver              # active link (symlink, or copy on Windows)
/// └── chromedrivers/
///     ├── chromedriver-<rev>    # installed binaries, one per revision
///     └── chromedriver_<rev>.zip
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub manifest_url: String,
    /// Directory holding the active link.
    pub bin_dir: PathBuf,
    /// Directory holding installed revisions and downloaded archives.
    pub drivers_dir: PathBuf,
}

impl Config {
    /// Layout rooted at the invoking user's home directory.
    pub fn from_home() -> Result<Self, ConfigError> {
        home_dir().map(Self::with_root).ok_or(ConfigError::NoHome)
    }

    /// Layout rooted at `root` (`<root>/bin`, `<root>/bin/chromedrivers`).
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let bin_dir = root.as_ref().join("bin");
        Self {
            manifest_url: MANIFEST_URL.to_string(),
            drivers_dir: bin_dir.join(DRIVERS_DIR_NAME),
            bin_dir,
        }
    }

    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = url.into();
        self
    }

    /// Fixed path of the active driver: `~/bin/chromedriver[.exe]`
    pub fn link_path(&self, platform: &Platform) -> PathBuf {
        self.bin_dir.join(platform.executable)
    }

    /// Installed binary for a revision: `~/bin/chromedrivers/chromedriver-<rev>`
    pub fn installed_binary_path(&self, record: &VersionRecord) -> PathBuf {
        self.drivers_dir.join(record.installed_binary_name())
    }

    /// Downloaded archive for a revision: `~/bin/chromedrivers/chromedriver_<rev>.zip`
    pub fn archive_path(&self, record: &VersionRecord) -> PathBuf {
        self.drivers_dir.join(record.archive_name())
    }
}
