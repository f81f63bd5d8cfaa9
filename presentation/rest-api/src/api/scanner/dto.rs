use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::barcode::model::{Symbology, ValidationResult};
use business::domain::batch::model::{BatchItemResult, BatchResult};
use business::domain::lookup::model::LookupResult;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductSource;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum SymbologyDto {
    #[oai(rename = "EAN-13")]
    Ean13,
    #[oai(rename = "UPC-A")]
    UpcA,
    #[oai(rename = "EAN-8")]
    Ean8,
    #[oai(rename = "UPC-E")]
    UpcE,
    #[oai(rename = "UNKNOWN")]
    Unknown,
}

impl From<Symbology> for SymbologyDto {
    fn from(symbology: Symbology) -> Self {
        match symbology {
            Symbology::Ean13 => SymbologyDto::Ean13,
            Symbology::UpcA => SymbologyDto::UpcA,
            Symbology::Ean8 => SymbologyDto::Ean8,
            Symbology::UpcE => SymbologyDto::UpcE,
            Symbology::Unknown => SymbologyDto::Unknown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductSourceDto {
    #[oai(rename = "local_database")]
    LocalDatabase,
    #[oai(rename = "external_api")]
    ExternalApi,
}

impl From<ProductSource> for ProductSourceDto {
    fn from(source: ProductSource) -> Self {
        match source {
            ProductSource::LocalDatabase => ProductSourceDto::LocalDatabase,
            ProductSource::ExternalApi => ProductSourceDto::ExternalApi,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BarcodeRequest {
    /// Raw barcode as scanned or typed; separators are ignored
    pub barcode: String,
}

/// Field names follow the catalog's snake_case product records.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub barcode: String,
    pub stock_quantity: i64,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub min_stock_level: Option<i64>,
    /// Which catalog answered
    pub source: ProductSourceDto,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            barcode: product.barcode,
            stock_quantity: product.stock_quantity,
            description: product.description,
            min_stock_level: product.min_stock_level,
            source: product.source.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct LookupResponse {
    pub success: bool,
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<LookupResult> for LookupResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            success: result.success,
            product: result.product.map(|p| p.into()),
            error: result.error,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub is_valid: bool,
    /// Symbology decided during validation; absent when no digits were given
    #[oai(skip_serializing_if_is_none)]
    pub format: Option<SymbologyDto>,
    #[oai(skip_serializing_if_is_none)]
    pub normalized_barcode: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
    /// Symbology guessed from the digit count alone
    pub detected_format: SymbologyDto,
    /// Digits zero-padded to the detected canonical width
    pub normalized: String,
}

impl ValidationResponse {
    pub fn new(result: ValidationResult, detected_format: Symbology, normalized: String) -> Self {
        Self {
            is_valid: result.is_valid,
            format: result.format.map(|f| f.into()),
            normalized_barcode: result.normalized_barcode,
            error: result.error,
            detected_format: detected_format.into(),
            normalized,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProcessBatchRequest {
    /// Raw barcodes, processed in order
    pub barcodes: Vec<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BatchItemDto {
    pub barcode: String,
    pub success: bool,
    #[oai(skip_serializing_if_is_none)]
    pub product_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BatchResultDto {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub results: Vec<BatchItemDto>,
}

impl From<BatchResult> for BatchResultDto {
    fn from(batch: BatchResult) -> Self {
        Self {
            total: batch.total as u64,
            successful: batch.successful as u64,
            failed: batch.failed as u64,
            results: batch
                .results
                .into_iter()
                .map(|item| BatchItemDto {
                    barcode: item.barcode,
                    success: item.success,
                    product_name: item.product_name,
                    error: item.error,
                })
                .collect(),
        }
    }
}

impl From<BatchResultDto> for BatchResult {
    fn from(dto: BatchResultDto) -> Self {
        Self {
            total: dto.total as usize,
            successful: dto.successful as usize,
            failed: dto.failed as usize,
            results: dto
                .results
                .into_iter()
                .map(|item| BatchItemResult {
                    barcode: item.barcode,
                    success: item.success,
                    product_name: item.product_name,
                    error: item.error,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CacheStatsResponse {
    /// Live entries currently cached
    pub entries: u64,
}
