use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use business::domain::errors::StoreError;
use business::domain::lookup::cache::DEFAULT_CACHE_TTL_HOURS;
use business::domain::lookup::store::KeyValueStore;
use persistence::kv::file_store::FileKeyValueStore;
use persistence::kv::memory_store::InMemoryKeyValueStore;

/// Configuration for the lookup cache.
pub struct CacheConfig {
    /// Directory for durable storage; in-memory when `None`.
    pub dir: Option<PathBuf>,
    pub ttl: chrono::Duration,
}

impl CacheConfig {
    /// Environment variables:
    /// - SCANNER_CACHE_DIR: cache directory (default: unset, in-memory cache)
    /// - SCANNER_CACHE_TTL_HOURS: entry lifetime in hours (default: 24)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SCANNER_CACHE_DIR").ok(),
            env::var("SCANNER_CACHE_TTL_HOURS").ok(),
        )
    }

    fn from_values(dir: Option<String>, ttl_hours: Option<String>) -> Self {
        let ttl_hours = ttl_hours
            .and_then(|hours| hours.trim().parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(DEFAULT_CACHE_TTL_HOURS);

        Self {
            dir: dir.filter(|d| !d.trim().is_empty()).map(PathBuf::from),
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    pub fn build_store(&self) -> Result<Arc<dyn KeyValueStore>, StoreError> {
        match &self.dir {
            Some(dir) => {
                tracing::info!("Lookup cache persisted under {}", dir.display());
                Ok(Arc::new(FileKeyValueStore::new(dir.clone())?))
            }
            None => {
                tracing::info!("Lookup cache kept in memory");
                Ok(Arc::new(InMemoryKeyValueStore::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_in_memory_store_and_day_ttl() {
        let config = CacheConfig::from_values(None, None);

        assert!(config.dir.is_none());
        assert_eq!(config.ttl, chrono::Duration::hours(24));
    }

    #[test]
    fn should_ignore_non_positive_ttl() {
        let config = CacheConfig::from_values(Some("  ".to_string()), Some("0".to_string()));

        assert!(config.dir.is_none());
        assert_eq!(config.ttl, chrono::Duration::hours(24));
    }

    #[test]
    fn should_read_directory_and_ttl() {
        let config =
            CacheConfig::from_values(Some("/var/cache/scanner".to_string()), Some("6".to_string()));

        assert_eq!(config.dir, Some(PathBuf::from("/var/cache/scanner")));
        assert_eq!(config.ttl, chrono::Duration::hours(6));
    }
}
