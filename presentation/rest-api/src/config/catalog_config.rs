use std::env;
use std::time::Duration;

use catalog::client::{DEFAULT_CATALOG_BASE_URL, DEFAULT_CATALOG_TIMEOUT_SECS};

/// Configuration for the external product catalog.
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_BASE_URL: catalog root URL (default: Open Food Facts)
    /// - CATALOG_TIMEOUT_SECS: request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CATALOG_BASE_URL").ok(),
            env::var("CATALOG_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string());
        let timeout_secs = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_CATALOG_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
