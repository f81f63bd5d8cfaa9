use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("AnalyticsError", "analytics.stats_failed")),
        )
    }
}
