//! Shared types for driverup.
//!
//! - [`manifest`]: the Chrome for Testing "known good versions" document.
//! - [`platform`]: the static OS/architecture table that decides which build
//!   to download and how the active binary is published.

pub mod manifest;
pub mod platform;

// Re-exports
pub use manifest::*;
pub use platform::*;

/// Artifact kind consumed from each record's `downloads` map.
pub const DRIVER_ARTIFACT: &str = "chromedriver";
