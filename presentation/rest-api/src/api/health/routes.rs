use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::lookup::use_cases::lookup::LookupBarcodeUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[serde(rename_all = "camelCase")]
#[oai(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Live entries in the lookup cache
    pub cached_lookups: u64,
}

/// Liveness endpoint for probes and load balancers.
pub struct Api {
    lookup_use_case: Arc<dyn LookupBarcodeUseCase>,
}

impl Api {
    pub fn new(lookup_use_case: Arc<dyn LookupBarcodeUseCase>) -> Self {
        Self { lookup_use_case }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns "healthy" while the service is running, together with the
    /// server time, the crate version and the lookup cache size.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cached_lookups: self.lookup_use_case.cached_entries() as u64,
        })
    }
}
