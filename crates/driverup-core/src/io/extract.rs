//! Archive extraction module
//!
//! Driver builds are published as zip archives with a single top-level
//! directory (`chromedriver-<platform>/`).

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] ZipError),

    #[error("Archive has no entry {}", .0.display())]
    MissingEntry(PathBuf),
}

/// A regular file written by [`extract_zip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Entry name, relative to the extraction root
    pub relative_path: PathBuf,
    /// Where it landed on disk
    pub absolute_path: PathBuf,
}

/// Extract a zip archive into `dest_dir`, overwriting existing files.
///
/// Entries whose names would escape `dest_dir` are skipped. Unix permission
/// bits stored in the archive are restored.
pub fn extract_zip(
    archive_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<ExtractedFile>, ExtractError> {
    debug!(archive = %archive_path.display(), dest = %dest_dir.display(), "extracting zip");

    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    fs::create_dir_all(dest_dir)?;

    let mut written = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative_path) = entry.enclosed_name() else {
            debug!(name = entry.name(), "skipping unsafe zip entry");
            continue;
        };
        let target = dest_dir.join(&relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        io::copy(&mut entry, &mut File::create(&target)?)?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(mode))?;
        }

        written.push(ExtractedFile {
            relative_path,
            absolute_path: target,
        });
    }

    debug!(files = written.len(), "zip extracted");
    Ok(written)
}

/// Look up the on-disk location of `entry` among extracted files.
pub fn locate<'a>(files: &'a [ExtractedFile], entry: &Path) -> Result<&'a Path, ExtractError> {
    files
        .iter()
        .find(|f| f.relative_path == entry)
        .map(|f| f.absolute_path.as_path())
        .ok_or_else(|| ExtractError::MissingEntry(entry.to_path_buf()))
}
