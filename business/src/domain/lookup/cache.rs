use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, Utc};

use super::errors::CacheError;
use super::model::{CacheEntry, LookupResult};
use super::store::KeyValueStore;

/// Store key under which the whole cache map is persisted.
pub const CACHE_STORAGE_KEY: &str = "barcode_lookup_cache";

pub const DEFAULT_CACHE_TTL_HOURS: i64 = 24;

type CacheMap = BTreeMap<String, CacheEntry>;

/// TTL cache of successful lookups, persisted as one JSON map in a
/// [`KeyValueStore`].
///
/// Expired entries are ignored on read and physically dropped by the sweep
/// that runs on every [`put`](Self::put).
pub struct LookupCache {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl LookupCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            ttl: Duration::hours(DEFAULT_CACHE_TTL_HOURS),
        }
    }

    pub fn with_ttl(self, ttl: Duration) -> Self {
        Self { ttl, ..self }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn load(&self) -> Result<CacheMap, CacheError> {
        match self.store.get(CACHE_STORAGE_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(CacheMap::new()),
        }
    }

    /// Returns the cached result for `barcode` if a live entry exists.
    ///
    /// Unreadable or corrupt storage counts as a miss.
    pub fn get(&self, barcode: &str) -> Option<LookupResult> {
        let entries = self.load().ok()?;
        let entry = entries.get(barcode)?;
        entry
            .is_live(Utc::now().timestamp_millis(), self.ttl)
            .then(|| entry.result.clone())
    }

    /// Sweeps expired entries and stores `result` under `barcode`.
    ///
    /// Failed results are never written.
    pub fn put(&self, barcode: &str, result: &LookupResult) -> Result<(), CacheError> {
        if !result.success {
            return Ok(());
        }

        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(CacheError::Serialization(_)) => CacheMap::new(),
            Err(err) => return Err(err),
        };

        let now = Utc::now().timestamp_millis();
        entries.retain(|_, entry| entry.is_live(now, self.ttl));
        entries.insert(
            barcode.to_string(),
            CacheEntry {
                result: result.clone(),
                timestamp: now,
            },
        );

        let blob = serde_json::to_string(&entries)?;
        self.store.set(CACHE_STORAGE_KEY, &blob)?;
        Ok(())
    }

    /// Erases the whole stored map.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.store.remove(CACHE_STORAGE_KEY)?;
        Ok(())
    }

    /// Number of live entries currently stored.
    pub fn len(&self) -> usize {
        let now = Utc::now().timestamp_millis();
        self.load()
            .map(|entries| {
                entries
                    .values()
                    .filter(|entry| entry.is_live(now, self.ttl))
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
