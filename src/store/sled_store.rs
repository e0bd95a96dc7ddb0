use chrono::Utc;
use serde::{Deserialize, Serialize};
use sled::{Db, Tree};
use tracing::debug;

use crate::utils::error::StoreError;

/// A cached reading as persisted in the store tree.
///
/// `expires_at` is an absolute Unix timestamp in milliseconds; `None` means
/// the entry never expires.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct StoredReading {
    value: String,
    expires_at: Option<i64>,
}

impl StoredReading {
    fn is_expired(&self, now_ms: i64) -> bool {
        matches!(self.expires_at, Some(deadline) if deadline <= now_ms)
    }
}

/// Last-value store keyed by topic.
///
/// Every write replaces the previous entry for the topic, so the store holds
/// exactly the latest payload per topic. Reads treat an expired entry the
/// same as a missing one and lazily remove it.
#[derive(Clone)]
pub struct LastValueStore {
    db: Db,
    tree: Tree,
}

impl LastValueStore {
    /// Open or create the database at `path`, using `tree` as the logical
    /// namespace for cached readings.
    pub fn open(path: &str, tree: &str) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let tree = db.open_tree(tree)?;
        Ok(Self { db, tree })
    }

    /// Upsert the value for `topic`. With `ttl_seconds` the entry expires
    /// that many seconds from now; each write refreshes the deadline. Without
    /// it the entry lives until the next write.
    pub fn set(
        &self,
        topic: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> Result<(), StoreError> {
        let reading = StoredReading {
            value: value.to_string(),
            expires_at: ttl_seconds.map(|s| Utc::now().timestamp_millis() + (s as i64) * 1000),
        };
        let serialized = serde_json::to_vec(&reading)?;
        self.tree.insert(topic.as_bytes(), serialized)?;
        Ok(())
    }

    /// Current value for `topic`, or `None` if never set or expired.
    pub fn get(&self, topic: &str) -> Result<Option<String>, StoreError> {
        let Some(raw) = self.tree.get(topic.as_bytes())? else {
            return Ok(None);
        };
        let reading: StoredReading = serde_json::from_slice(&raw)?;
        if reading.is_expired(Utc::now().timestamp_millis()) {
            // Lazy removal; a concurrent overwrite simply wins.
            let _ = self.tree.remove(topic.as_bytes())?;
            debug!("expired entry removed for {topic}");
            return Ok(None);
        }
        Ok(Some(reading.value))
    }

    /// All currently-live topics, in key order.
    pub fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        let now_ms = Utc::now().timestamp_millis();
        let mut keys = Vec::new();
        for entry in self.tree.iter() {
            let (key_bytes, raw) = entry?;
            let reading: StoredReading = serde_json::from_slice(&raw)?;
            if reading.is_expired(now_ms) {
                let _ = self.tree.remove(&key_bytes)?;
                continue;
            }
            let key = std::str::from_utf8(&key_bytes)
                .map_err(|_| StoreError::InvalidKey)?
                .to_string();
            keys.push(key);
        }
        Ok(keys)
    }

    /// Values for `topics`, positionally aligned with the input. A topic that
    /// is missing or expired yields `None` at its position.
    pub fn bulk_get(&self, topics: &[String]) -> Result<Vec<Option<String>>, StoreError> {
        topics.iter().map(|t| self.get(t)).collect()
    }

    /// Flush pending writes to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for LastValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastValueStore")
            .field("db", &"sled::Db")
            .field("entries", &self.tree.len())
            .finish()
    }
}
