//! Content-hash cache keys.

use sha2::{Digest, Sha256};

/// Derive a cache key as `prefix:<sha256-hex>` of the payload.
///
/// Keys are stable across processes so cached replies survive restarts of
/// the shell as long as the store directory does.
pub fn cache_key(prefix: &str, payload: &str) -> String {
    let digest = Sha256::digest(payload.as_bytes());
    format!("{prefix}:{digest:x}")
}
