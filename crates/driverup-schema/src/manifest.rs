//! Chrome for Testing version manifest.
//!
//! The manifest lists every known-good driver release in chronological
//! order (oldest first). Each record carries a human-readable `version`, an
//! opaque `revision` used as the install key, and per-artifact download
//! lists keyed by platform identifier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::DRIVER_ARTIFACT;
use crate::platform::PlatformId;

/// Top-level manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Every known release, oldest first.
    pub versions: Vec<VersionRecord>,
}

/// One released build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Dotted version string (e.g. `120.0.6099.109`).
    pub version: String,
    /// Opaque build revision, unique per record.
    pub revision: String,
    /// Artifact kind (e.g. `chrome`, `chromedriver`) to its per-platform downloads.
    ///
    /// Older releases predate driver builds and have no `chromedriver` key.
    pub downloads: BTreeMap<String, Vec<DownloadEntry>>,
}

/// A single downloadable archive for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadEntry {
    /// Platform identifier (e.g. `linux64`, `win32`).
    pub platform: String,
    /// Archive URL, used verbatim.
    pub url: String,
}

impl VersionRecord {
    /// Driver downloads for this record, empty if none were published.
    pub fn driver_downloads(&self) -> &[DownloadEntry] {
        self.downloads
            .get(DRIVER_ARTIFACT)
            .map_or(&[], Vec::as_slice)
    }

    /// The driver download published for `platform`, if any.
    pub fn driver_download(&self, platform: PlatformId) -> Option<&DownloadEntry> {
        self.driver_downloads()
            .iter()
            .find(|d| d.platform == platform.as_str())
    }

    /// File name of the installed binary for this revision.
    pub fn installed_binary_name(&self) -> String {
        format!("{DRIVER_ARTIFACT}-{}", self.revision)
    }

    /// File name the downloaded archive is saved under.
    pub fn archive_name(&self) -> String {
        format!("{DRIVER_ARTIFACT}_{}.zip", self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "timestamp": "2024-01-01T00:00:00.000Z",
        "versions": [
            {
                "version": "113.0.5672.0",
                "revision": "1121455",
                "downloads": {
                    "chrome": [
                        {"platform": "linux64", "url": "https://example.com/113/chrome-linux64.zip"}
                    ]
                }
            },
            {
                "version": "120.0.6099.109",
                "revision": "1217362",
                "downloads": {
                    "chrome": [
                        {"platform": "linux64", "url": "https://example.com/120/chrome-linux64.zip"}
                    ],
                    "chromedriver": [
                        {"platform": "linux64", "url": "https://example.com/120/chromedriver-linux64.zip"},
                        {"platform": "win64", "url": "https://example.com/120/chromedriver-win64.zip"}
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: Manifest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.versions.len(), 2);

        let latest = &manifest.versions[1];
        assert_eq!(latest.version, "120.0.6099.109");
        assert_eq!(latest.revision, "1217362");
        assert_eq!(latest.driver_downloads().len(), 2);
    }

    #[test]
    fn test_record_without_driver_builds() {
        let manifest: Manifest = serde_json::from_str(SAMPLE).unwrap();
        let old = &manifest.versions[0];
        assert!(old.driver_downloads().is_empty());
        assert!(old.driver_download(PlatformId::LINUX64).is_none());
    }

    #[test]
    fn test_driver_download_lookup() {
        let manifest: Manifest = serde_json::from_str(SAMPLE).unwrap();
        let latest = &manifest.versions[1];

        let entry = latest.driver_download(PlatformId::WIN64).unwrap();
        assert_eq!(entry.url, "https://example.com/120/chromedriver-win64.zip");
        assert!(latest.driver_download(PlatformId::WIN32).is_none());
    }

    #[test]
    fn test_missing_revision_is_rejected() {
        let body = r#"{"versions": [{"version": "1.0", "downloads": {}}]}"#;
        assert!(serde_json::from_str::<Manifest>(body).is_err());
    }

    #[test]
    fn test_file_names() {
        let record = VersionRecord {
            version: "120.0.6099.109".into(),
            revision: "1217362".into(),
            downloads: BTreeMap::new(),
        };
        assert_eq!(record.installed_binary_name(), "chromedriver-1217362");
        assert_eq!(record.archive_name(), "chromedriver_1217362.zip");
    }
}
