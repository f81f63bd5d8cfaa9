use serde::{Deserialize, Serialize};

use super::value_objects::ProductSource;

/// Catalog product as returned by a barcode lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub barcode: String,
    pub stock_quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock_level: Option<i64>,
    pub source: ProductSource,
}

impl Product {
    /// Same product, tagged with a different origin.
    pub fn with_source(self, source: ProductSource) -> Self {
        Self { source, ..self }
    }
}
