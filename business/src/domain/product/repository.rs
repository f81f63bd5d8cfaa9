use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Local product catalog, keyed by barcode.
#[async_trait]
pub trait ProductCatalogRepository: Send + Sync {
    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
}
