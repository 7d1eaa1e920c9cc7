//! Cache store interface and file-backed implementation.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Best-effort key-value store over JSON values.
///
/// Both operations swallow their own failures: `set` logs and returns,
/// `get` logs and reports a miss. Callers cannot distinguish an error from
/// a miss, which is the contract for disposable entries.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Store a value, optionally expiring after `ttl_secs`.
    async fn set(&self, key: &str, value: Value, ttl_secs: Option<u64>);

    /// Fetch a value; `None` for miss, expired, or any error.
    async fn get(&self, key: &str) -> Option<Value>;
}

/// Envelope persisted per entry.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope {
    value: Value,
    expires_at: Option<DateTime<Utc>>,
}

/// File-backed store: one JSON file per key under a root directory.
///
/// Writes go through a temp file and rename, so concurrent sessions sharing
/// the directory resolve last-writer-wins without torn entries.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    root: PathBuf,
}

impl FileCacheStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        debug!("initialized file cache store (root={})", root.display());
        Ok(Self { root })
    }

    /// Entry path for a key. Keys may contain separators, so the filename
    /// is a hash of the full key.
    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.root.join(format!("{digest:x}.json"))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.root.join(format!("{digest:x}.json.tmp"))
    }

    fn write_entry(&self, key: &str, envelope: &CacheEnvelope) -> std::io::Result<()> {
        let text = serde_json::to_string(envelope)?;
        let temp = self.temp_path(key);
        std::fs::write(&temp, text)?;
        std::fs::rename(temp, self.entry_path(key))?;
        Ok(())
    }

    fn read_entry(&self, key: &str) -> std::io::Result<Option<CacheEnvelope>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn set(&self, key: &str, value: Value, ttl_secs: Option<u64>) {
        let expires_at = ttl_secs.map(|secs| Utc::now() + Duration::seconds(secs as i64));
        let envelope = CacheEnvelope { value, expires_at };
        if let Err(err) = self.write_entry(key, &envelope) {
            warn!("cache set failed (key={key}): {err}");
        }
    }

    async fn get(&self, key: &str) -> Option<Value> {
        let envelope = match self.read_entry(key) {
            Ok(Some(envelope)) => envelope,
            Ok(None) => return None,
            Err(err) => {
                warn!("cache get failed (key={key}): {err}");
                return None;
            }
        };
        if let Some(expires_at) = envelope.expires_at {
            if expires_at <= Utc::now() {
                debug!("cache entry expired (key={key})");
                let _ = std::fs::remove_file(self.entry_path(key));
                return None;
            }
        }
        Some(envelope.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{CacheStore, FileCacheStore};
    use crate::key::cache_key;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let temp = tempdir().expect("tempdir");
        let store = FileCacheStore::new(temp.path()).expect("store");
        let key = cache_key("reply", "hello");

        store.set(&key, json!({"response": "hi"}), None).await;
        assert_eq!(store.get(&key).await, Some(json!({"response": "hi"})));
    }

    #[tokio::test]
    async fn missing_key_is_a_miss() {
        let temp = tempdir().expect("tempdir");
        let store = FileCacheStore::new(temp.path()).expect("store");
        assert_eq!(store.get("reply:absent").await, None);
    }

    #[tokio::test]
    async fn expired_entries_read_as_misses() {
        let temp = tempdir().expect("tempdir");
        let store = FileCacheStore::new(temp.path()).expect("store");
        let key = cache_key("reply", "stale");

        store.set(&key, json!("old"), Some(0)).await;
        assert_eq!(store.get(&key).await, None);
        // The expired file is removed best-effort.
        assert_eq!(store.get(&key).await, None);
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let temp = tempdir().expect("tempdir");
        let store = FileCacheStore::new(temp.path()).expect("store");
        let key = cache_key("reply", "contested");

        store.set(&key, json!("first"), None).await;
        store.set(&key, json!("second"), None).await;
        assert_eq!(store.get(&key).await, Some(json!("second")));
    }

    #[tokio::test]
    async fn corrupt_entries_are_swallowed() {
        let temp = tempdir().expect("tempdir");
        let store = FileCacheStore::new(temp.path()).expect("store");
        let key = cache_key("reply", "broken");

        store.set(&key, json!("ok"), None).await;
        let path = store.entry_path(&key);
        std::fs::write(&path, "not json").expect("corrupt");
        assert_eq!(store.get(&key).await, None);
    }
}
