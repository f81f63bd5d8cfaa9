use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Json, PlainText},
};

use business::domain::barcode::validator::{detect_format, normalize_barcode, validate_barcode};
use business::domain::batch::csv_format::{
    export_results_to_csv, generate_csv_template, parse_csv,
};
use business::domain::batch::use_cases::process::{
    ProcessBarcodesParams, ProcessBatchUseCase, ProcessCsvDataParams,
};
use business::domain::lookup::use_cases::lookup::{LookupBarcodeParams, LookupBarcodeUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scanner::dto::{
    BarcodeRequest, BatchResultDto, CacheStatsResponse, LookupResponse, ProcessBatchRequest,
    ValidationResponse,
};
use crate::api::tags::ApiTags;

const TEMPLATE_FILE_NAME: &str = "attachment; filename=\"barcode_template.csv\"";
const EXPORT_FILE_NAME: &str = "attachment; filename=\"barcode_results.csv\"";

pub struct ScannerApi {
    lookup_use_case: Arc<dyn LookupBarcodeUseCase>,
    batch_use_case: Arc<dyn ProcessBatchUseCase>,
}

impl ScannerApi {
    pub fn new(
        lookup_use_case: Arc<dyn LookupBarcodeUseCase>,
        batch_use_case: Arc<dyn ProcessBatchUseCase>,
    ) -> Self {
        Self {
            lookup_use_case,
            batch_use_case,
        }
    }
}

/// Barcode scanning API
///
/// Validation, single and batch lookups, CSV import/export and cache control.
#[OpenApi]
impl ScannerApi {
    /// Look up a scanned barcode
    ///
    /// Validates the barcode, then answers from the cache or the product
    /// catalogs. Failures are reported in the body with `success: false`.
    #[oai(path = "/scanner/scan", method = "post", tag = "ApiTags::Scanner")]
    async fn scan(&self, body: Json<BarcodeRequest>) -> ScanResponse {
        let result = self
            .lookup_use_case
            .execute(LookupBarcodeParams {
                barcode: body.0.barcode,
            })
            .await;

        ScanResponse::Ok(Json(result.into()))
    }

    /// Validate a barcode without looking it up
    #[oai(path = "/scanner/validate", method = "post", tag = "ApiTags::Scanner")]
    async fn validate(&self, body: Json<BarcodeRequest>) -> ValidateResponse {
        let raw = body.0.barcode;
        let response =
            ValidationResponse::new(validate_barcode(&raw), detect_format(&raw), normalize_barcode(&raw));

        ValidateResponse::Ok(Json(response))
    }

    /// Look up a list of barcodes
    ///
    /// Rows are processed one at a time in input order; one failing row
    /// never aborts the batch.
    #[oai(path = "/scanner/batch", method = "post", tag = "ApiTags::Scanner")]
    async fn process_batch(&self, body: Json<ProcessBatchRequest>) -> ProcessBatchResponse {
        let result = self
            .batch_use_case
            .process_barcodes(ProcessBarcodesParams {
                barcodes: body.0.barcodes,
            })
            .await;

        ProcessBatchResponse::Ok(Json(result.into()))
    }

    /// Look up every row of a CSV import
    ///
    /// Only the barcode column is used. A first line mentioning "barcode"
    /// is treated as a header.
    #[oai(path = "/scanner/batch/csv", method = "post", tag = "ApiTags::Scanner")]
    async fn process_csv(&self, body: PlainText<String>) -> ProcessBatchResponse {
        let rows = parse_csv(&body.0);
        let result = self
            .batch_use_case
            .process_csv_data(ProcessCsvDataParams { rows })
            .await;

        ProcessBatchResponse::Ok(Json(result.into()))
    }

    /// Export a batch result as CSV
    #[oai(path = "/scanner/batch/export", method = "post", tag = "ApiTags::Scanner")]
    async fn export_batch(&self, body: Json<BatchResultDto>) -> CsvFileResponse {
        let csv = export_results_to_csv(&body.0.into());

        CsvFileResponse::Ok(PlainText(csv), EXPORT_FILE_NAME.to_string())
    }

    /// Download the CSV import template
    #[oai(path = "/scanner/batch/template", method = "get", tag = "ApiTags::Scanner")]
    async fn batch_template(&self) -> CsvFileResponse {
        CsvFileResponse::Ok(PlainText(generate_csv_template()), TEMPLATE_FILE_NAME.to_string())
    }

    /// Count live cache entries
    #[oai(path = "/scanner/cache", method = "get", tag = "ApiTags::Scanner")]
    async fn cache_stats(&self) -> CacheStatsApiResponse {
        let entries = self.lookup_use_case.cached_entries() as u64;

        CacheStatsApiResponse::Ok(Json(CacheStatsResponse { entries }))
    }

    /// Erase every cached lookup
    #[oai(path = "/scanner/cache", method = "delete", tag = "ApiTags::Scanner")]
    async fn clear_cache(&self) -> ClearCacheResponse {
        match self.lookup_use_case.clear_cache() {
            Ok(()) => ClearCacheResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCacheResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanResponse {
    #[oai(status = 200)]
    Ok(Json<LookupResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ValidateResponse {
    #[oai(status = 200)]
    Ok(Json<ValidationResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProcessBatchResponse {
    #[oai(status = 200)]
    Ok(Json<BatchResultDto>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CsvFileResponse {
    #[oai(status = 200, content_type = "text/csv")]
    Ok(
        PlainText<String>,
        #[oai(header = "Content-Disposition")] String,
    ),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CacheStatsApiResponse {
    #[oai(status = 200)]
    Ok(Json<CacheStatsResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCacheResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
