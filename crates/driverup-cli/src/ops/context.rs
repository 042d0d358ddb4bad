//! Shared run context.
//!
//! Groups the immutable configuration, the HTTP client and the reporter so
//! every operation receives them explicitly instead of reaching for globals.

use driverup_core::{Config, Reporter};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Context {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
    pub reporter: Arc<dyn Reporter>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Context {
    pub fn new(config: Config, client: reqwest::Client, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config: Arc::new(config),
            client,
            reporter,
        }
    }
}
