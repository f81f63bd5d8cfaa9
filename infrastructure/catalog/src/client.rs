use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client configuration for the external product catalog.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the product endpoint URL for a barcode.
    pub fn product_url(&self, barcode: &str) -> String {
        format!("{}/api/v2/product/{}.json", self.base_url, barcode)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATALOG_BASE_URL.to_string(),
            Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
        )
    }
}
