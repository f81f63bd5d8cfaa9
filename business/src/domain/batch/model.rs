use serde::{Deserialize, Serialize};

/// One parsed line of a batch import file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub barcode: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Per-barcode outcome inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResult {
    pub barcode: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate of a batch run. `results` follows input order one-to-one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<BatchItemResult>,
}

impl BatchResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn record_success(&mut self, barcode: String, product_name: Option<String>) {
        self.total += 1;
        self.successful += 1;
        self.results.push(BatchItemResult {
            barcode,
            success: true,
            product_name,
            error: None,
        });
    }

    pub fn record_failure(&mut self, barcode: String, error: Option<String>) {
        self.total += 1;
        self.failed += 1;
        self.results.push(BatchItemResult {
            barcode,
            success: false,
            product_name: None,
            error,
        });
    }
}
