//! Best-effort key-value cache for Parley.
//!
//! Entries are disposable: errors are logged and swallowed, a miss and a
//! failure are indistinguishable to callers, and concurrent writers resolve
//! last-writer-wins. There is no authoritative store behind the cache, so no
//! consistency guarantee is offered beyond optional expiry.

mod key;
mod store;

/// Content-hash key derivation.
pub use key::cache_key;
/// Store interface and the default file-backed implementation.
pub use store::{CacheStore, FileCacheStore};
