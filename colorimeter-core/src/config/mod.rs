//! Configuration
//!
//! Loaded once from JSON text at boot and read-only afterwards. Every
//! known key is validated on its own; a bad entry is dropped and reported
//! as a [`ConfigIssue`] while the rest of the document still applies.

pub mod loader;
pub mod types;

pub use loader::{parse, ConfigError, ConfigIssue, Loaded};
pub use types::*;
