use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;

/// Outcome of resolving a barcode to a product.
///
/// Built through [`LookupResult::found`] and [`LookupResult::failed`] so that
/// `success` always agrees with the presence of `product`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    pub fn found(product: Product) -> Self {
        Self {
            success: true,
            product: Some(product),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            product: None,
            error: Some(error.into()),
        }
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.name.as_str())
    }
}

/// A cached lookup result stamped with its write time in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub result: LookupResult,
    pub timestamp: i64,
}

impl CacheEntry {
    /// An entry is live while its age is strictly below the TTL.
    pub fn is_live(&self, now_millis: i64, ttl: Duration) -> bool {
        now_millis - self.timestamp < ttl.num_milliseconds()
    }
}
