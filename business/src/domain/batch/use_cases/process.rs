use async_trait::async_trait;

use crate::domain::batch::model::{BatchResult, BatchRow};

#[derive(Debug, Clone)]
pub struct ProcessBarcodesParams {
    pub barcodes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProcessCsvDataParams {
    pub rows: Vec<BatchRow>,
}

#[async_trait]
pub trait ProcessBatchUseCase: Send + Sync {
    async fn process_barcodes(&self, params: ProcessBarcodesParams) -> BatchResult;
    async fn process_csv_data(&self, params: ProcessCsvDataParams) -> BatchResult;
}
