//! Configuration models and loading for Parley.
//!
//! This crate owns the config schema, the JSON5 file loader, env overrides,
//! and validation used by the chat shell and SDK consumers.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// File discovery, env overrides, and the main entry point.
pub use loader::{api_key_from, apply_env_overrides, load, load_from_str, validate};
/// Configuration schema models.
pub use model::*;
