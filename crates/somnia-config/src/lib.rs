//! Configuration model and loading for the Somnia journal.
//!
//! This crate owns the Somnia config schema, validation, and the JSON5
//! file loading used by the CLI.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Default path helpers for the journal root and user config file.
pub use loader::{default_journal_root, default_user_config_path};
/// Configuration schema models.
pub use model::*;
