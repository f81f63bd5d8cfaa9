use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::lookup::errors::CacheError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CacheError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            CacheError::Store(_) => "cache.store_failed",
            CacheError::Serialization(_) => "cache.serialization_failed",
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("CacheError", message)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::StoreError;

    #[test]
    fn should_map_store_failure_to_internal_error() {
        let (status, json) =
            CacheError::Store(StoreError::Write("read-only".to_string())).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "CacheError");
        assert_eq!(json.0.message, "cache.store_failed");
    }
}
