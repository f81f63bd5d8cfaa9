use async_trait::async_trait;

use crate::domain::lookup::errors::CacheError;
use crate::domain::lookup::model::LookupResult;

#[derive(Debug, Clone)]
pub struct LookupBarcodeParams {
    pub barcode: String,
}

#[async_trait]
pub trait LookupBarcodeUseCase: Send + Sync {
    async fn execute(&self, params: LookupBarcodeParams) -> LookupResult;
    fn clear_cache(&self) -> Result<(), CacheError>;
    fn cached_entries(&self) -> usize;
}
