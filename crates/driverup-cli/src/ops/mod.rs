pub mod context;
pub mod error;
pub mod install;
pub mod link;

pub use context::Context;
pub use error::InstallError;
