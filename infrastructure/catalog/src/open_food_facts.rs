use async_trait::async_trait;
use serde::Deserialize;

use business::domain::lookup::errors::ResolverError;
use business::domain::lookup::model::LookupResult;
use business::domain::lookup::services::ProductResolver;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductSource;

use crate::client::CatalogClient;

const NOT_FOUND: &str = "Product not found in external catalog";
const UNAVAILABLE: &str = "External product database unavailable";
const UNKNOWN_PRODUCT: &str = "Unknown Product";
const NO_DESCRIPTION: &str = "No description available";

const DEFAULT_PRICE: f64 = 1.0;
const DEFAULT_MIN_STOCK_LEVEL: i64 = 5;

#[derive(Deserialize)]
struct OpenFoodFactsResponse {
    status: i32,
    product: Option<OpenFoodFactsProduct>,
}

#[derive(Deserialize)]
struct OpenFoodFactsProduct {
    product_name: Option<String>,
    generic_name: Option<String>,
    brands: Option<String>,
    categories: Option<String>,
    quantity: Option<String>,
}

impl OpenFoodFactsProduct {
    fn description(&self) -> String {
        let parts: Vec<&str> = [
            &self.generic_name,
            &self.brands,
            &self.categories,
            &self.quantity,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            parts.join(" | ")
        }
    }

    fn into_domain(self, barcode: &str) -> Product {
        let description = self.description();
        let name = self
            .product_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

        Product {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            price: DEFAULT_PRICE,
            barcode: barcode.to_string(),
            stock_quantity: 0,
            description: Some(description),
            min_stock_level: Some(DEFAULT_MIN_STOCK_LEVEL),
            source: ProductSource::ExternalApi,
        }
    }
}

/// Resolves barcodes against the public Open Food Facts catalog.
pub struct OpenFoodFactsResolver {
    client: CatalogClient,
}

impl OpenFoodFactsResolver {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    fn into_lookup_result(barcode: &str, data: OpenFoodFactsResponse) -> LookupResult {
        match data.product {
            Some(product) if data.status == 1 => LookupResult::found(product.into_domain(barcode)),
            _ => LookupResult::failed(NOT_FOUND),
        }
    }
}

#[async_trait]
impl ProductResolver for OpenFoodFactsResolver {
    async fn resolve(&self, barcode: &str) -> Result<LookupResult, ResolverError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(barcode))
            .send()
            .await
            .map_err(|_| ResolverError::Network(UNAVAILABLE.to_string()))?;

        if !response.status().is_success() {
            return Ok(LookupResult::failed(NOT_FOUND));
        }

        match response.json::<OpenFoodFactsResponse>().await {
            Ok(data) => Ok(Self::into_lookup_result(barcode, data)),
            Err(_) => Ok(LookupResult::failed(NOT_FOUND)),
        }
    }
}
