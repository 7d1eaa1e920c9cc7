//! Public SDK surface for Parley.
//!
//! This crate re-exports the core building blocks and provides a small
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use parley_cache as cache;
/// Re-export for convenience.
pub use parley_config as config;
pub use parley_core as core;
/// Re-export for convenience.
pub use parley_llm as llm;
/// Re-export for convenience.
pub use parley_memory as memory;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
