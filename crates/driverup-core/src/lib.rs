//! Core building blocks for driverup.
//!
//! Everything with a side effect lives here: resolving the install layout,
//! fetching the manifest, downloading and extracting archives. Version
//! selection is pure and sits alongside so the CLI can compose the flow.

pub mod io;
pub mod manifest;
pub mod paths;
pub mod reporter;
pub mod selector;

pub use paths::*;
pub use reporter::{NullReporter, Reporter};

/// User Agent string for outgoing requests
pub const USER_AGENT: &str = concat!("driverup/", env!("CARGO_PKG_VERSION"));
