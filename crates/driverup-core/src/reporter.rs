//! Reporter trait for dependency injection
//!
//! This trait allows core logic to report progress and status without
//! being coupled to a specific terminal implementation.

pub trait Reporter: Send + Sync {
    /// Indicates a new section or phase has started (e.g. "Fetching", "Installing").
    fn section(&self, title: &str);

    /// Updates the progress of an archive download.
    fn downloading(&self, version: &str, current: u64, total: Option<u64>);

    /// Signals that the downloaded archive is being unpacked.
    fn extracting(&self, version: &str);

    /// Marks the driver for `version` as successfully installed and linked.
    fn done(&self, version: &str, detail: &str);

    /// Marks the install of `version` as failed with a specific reason.
    fn failed(&self, version: &str, reason: &str);

    /// Log an error message.
    fn error(&self, msg: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn section(&self, title: &str) {
        (**self).section(title)
    }
    fn downloading(&self, version: &str, current: u64, total: Option<u64>) {
        (**self).downloading(version, current, total)
    }
    fn extracting(&self, version: &str) {
        (**self).extracting(version)
    }
    fn done(&self, version: &str, detail: &str) {
        (**self).done(version, detail)
    }
    fn failed(&self, version: &str, reason: &str) {
        (**self).failed(version, reason)
    }
    fn error(&self, msg: &str) {
        (**self).error(msg)
    }
}

/// A no-op reporter for silent operations (e.g., testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn section(&self, _: &str) {}
    fn downloading(&self, _: &str, _: u64, _: Option<u64>) {}
    fn extracting(&self, _: &str) {}
    fn done(&self, _: &str, _: &str) {}
    fn failed(&self, _: &str, _: &str) {}
    fn error(&self, _: &str) {}
}
