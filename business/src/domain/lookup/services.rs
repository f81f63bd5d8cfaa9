use async_trait::async_trait;

use super::errors::ResolverError;
use super::model::LookupResult;

/// Service port resolving a normalized barcode against a product catalog.
///
/// `Ok` with a failed result means the catalog answered but had no match;
/// `Err` means the catalog could not be reached.
#[async_trait]
pub trait ProductResolver: Send + Sync {
    async fn resolve(&self, barcode: &str) -> Result<LookupResult, ResolverError>;
}
