use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analytics::model::{ScanEvent, ScanSource};
use crate::domain::analytics::repository::ScanEventRepository;
use crate::domain::logger::Logger;
use crate::domain::lookup::errors::ResolverError;
use crate::domain::lookup::model::LookupResult;
use crate::domain::lookup::services::ProductResolver;
use crate::domain::product::repository::ProductCatalogRepository;
use crate::domain::product::value_objects::ProductSource;

const NOT_FOUND_ANYWHERE: &str = "Product not found in local database or external APIs";

/// Resolves barcodes against the local catalog first, then an external
/// catalog, saving external hits locally so the next scan stays local.
/// Every answered resolution is recorded as a scan event; recording
/// failures are logged and never affect the result.
pub struct CatalogResolver {
    pub repository: Arc<dyn ProductCatalogRepository>,
    pub external: Arc<dyn ProductResolver>,
    pub scan_events: Arc<dyn ScanEventRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CatalogResolver {
    async fn track(&self, barcode: &str, success: bool, source: ScanSource) {
        let event = ScanEvent::now(barcode, success, source);
        if let Err(err) = self.scan_events.record(&event).await {
            self.logger
                .error(&format!("Failed to track scan event for {}: {}", barcode, err));
        }
    }
}

#[async_trait]
impl ProductResolver for CatalogResolver {
    async fn resolve(&self, barcode: &str) -> Result<LookupResult, ResolverError> {
        if let Some(product) = self.repository.find_by_barcode(barcode).await? {
            self.logger
                .info(&format!("Product found in local database: {}", product.name));
            self.track(barcode, true, ScanSource::LocalDatabase).await;
            return Ok(LookupResult::found(
                product.with_source(ProductSource::LocalDatabase),
            ));
        }

        self.logger.info(&format!(
            "Product not found locally, trying external lookup for: {}",
            barcode
        ));

        let external = self.external.resolve(barcode).await?;
        match (external.success, external.product) {
            (true, Some(product)) => {
                let product = product.with_source(ProductSource::ExternalApi);
                let saved = match self.repository.save(&product).await {
                    Ok(()) => {
                        self.logger.info(&format!(
                            "Saved external product to local database: {}",
                            product.name
                        ));
                        true
                    }
                    Err(err) => {
                        self.logger.error(&format!(
                            "Failed to save external product {}: {}",
                            product.barcode, err
                        ));
                        false
                    }
                };
                self.track(barcode, saved, ScanSource::ExternalApi).await;
                Ok(LookupResult::found(product))
            }
            _ => {
                self.logger
                    .info(&format!("Product not found anywhere for barcode: {}", barcode));
                self.track(barcode, false, ScanSource::NotFound).await;
                Ok(LookupResult::failed(NOT_FOUND_ANYWHERE))
            }
        }
    }
}
