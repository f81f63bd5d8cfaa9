use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use crate::domain::batch::model::BatchResult;
use crate::domain::batch::use_cases::process::{
    ProcessBarcodesParams, ProcessBatchUseCase, ProcessCsvDataParams,
};
use crate::domain::logger::Logger;
use crate::domain::lookup::use_cases::lookup::{LookupBarcodeParams, LookupBarcodeUseCase};

const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Runs barcode lookups one after another; a failing row never stops the batch.
pub struct ProcessBatchUseCaseImpl {
    pub lookup: Arc<dyn LookupBarcodeUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessBatchUseCase for ProcessBatchUseCaseImpl {
    async fn process_barcodes(&self, params: ProcessBarcodesParams) -> BatchResult {
        self.logger.info(&format!(
            "Processing {} barcodes in batch",
            params.barcodes.len()
        ));

        let mut batch = BatchResult::with_capacity(params.barcodes.len());

        for barcode in params.barcodes {
            let lookup = async {
                self.lookup
                    .execute(LookupBarcodeParams {
                        barcode: barcode.clone(),
                    })
                    .await
            };

            let outcome = AssertUnwindSafe(lookup).catch_unwind().await;
            match outcome {
                Ok(result) if result.success => {
                    batch.record_success(barcode, result.product.map(|p| p.name))
                }
                Ok(result) => batch.record_failure(barcode, result.error),
                Err(_) => {
                    self.logger
                        .error(&format!("Unexpected error while processing barcode {}", barcode));
                    batch.record_failure(barcode, Some(UNEXPECTED_ERROR.to_string()));
                }
            }
        }

        self.logger.info(&format!(
            "Batch finished: {} successful, {} failed of {}",
            batch.successful, batch.failed, batch.total
        ));

        batch
    }

    async fn process_csv_data(&self, params: ProcessCsvDataParams) -> BatchResult {
        let barcodes = params.rows.into_iter().map(|row| row.barcode).collect();
        self.process_barcodes(ProcessBarcodesParams { barcodes }).await
    }
}
