//! Publishing the active driver at its fixed path.
//!
//! The old entry is removed first; an absent entry is fine, any other
//! removal failure aborts before anything new is written.

use std::fs;
use std::io;
use std::path::Path;

use driverup_schema::LinkStrategy;
use tracing::debug;

use crate::ops::InstallError;

/// Replace whatever is at `link` with `strategy` applied to `binary`.
pub fn publish(strategy: LinkStrategy, binary: &Path, link: &Path) -> Result<(), InstallError> {
    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| InstallError::fs("Failed to create link directory", e))?;
    }

    remove_existing(link)?;

    debug!(?strategy, binary = %binary.display(), link = %link.display(), "publishing driver");
    match strategy {
        LinkStrategy::Symlink => symlink(binary, link)
            .map_err(|e| InstallError::fs("Failed to create driver symlink", e)),
        LinkStrategy::Copy => fs::copy(binary, link)
            .map(|_| ())
            .map_err(|e| InstallError::fs("Failed to copy driver", e)),
    }
}

fn remove_existing(link: &Path) -> Result<(), InstallError> {
    match fs::remove_file(link) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(InstallError::fs("Failed to remove existing driver link", e)),
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn test_symlink_replaces_previous_target() {
        let tmp = TempDir::new().unwrap();
        let old = tmp.path().join("chromedriver-1");
        let new = tmp.path().join("chromedriver-2");
        fs::write(&old, b"old").unwrap();
        fs::write(&new, b"new").unwrap();
        let link = tmp.path().join("bin").join("chromedriver");

        publish(LinkStrategy::Symlink, &old, &link).unwrap();
        assert_eq!(fs::read_link(&link).unwrap(), old);

        publish(LinkStrategy::Symlink, &new, &link).unwrap();
        assert_eq!(fs::read_link(&link).unwrap(), new);
        assert_eq!(fs::read(&link).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_replaces_dangling_link() {
        let tmp = TempDir::new().unwrap();
        let binary = tmp.path().join("chromedriver-2");
        fs::write(&binary, b"new").unwrap();
        let link = tmp.path().join("chromedriver");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();

        publish(LinkStrategy::Symlink, &binary, &link).unwrap();
        assert_eq!(fs::read_link(&link).unwrap(), binary);
    }

    #[test]
    fn test_copy_replaces_previous_file() {
        let tmp = TempDir::new().unwrap();
        let binary = tmp.path().join("chromedriver-2");
        fs::write(&binary, b"new").unwrap();
        let link = tmp.path().join("chromedriver.exe");
        fs::write(&link, b"old").unwrap();

        publish(LinkStrategy::Copy, &binary, &link).unwrap();
        assert!(!fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&link).unwrap(), b"new");
    }

    #[test]
    fn test_directory_in_the_way_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let binary = tmp.path().join("chromedriver-2");
        fs::write(&binary, b"new").unwrap();
        let link = tmp.path().join("chromedriver");
        fs::create_dir(&link).unwrap();

        let err = publish(LinkStrategy::Copy, &binary, &link).unwrap_err();
        assert!(matches!(err, InstallError::Filesystem { .. }));
        assert!(link.is_dir());
    }
}
