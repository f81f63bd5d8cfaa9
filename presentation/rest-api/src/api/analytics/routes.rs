use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::analytics::use_cases::daily_stats::GetDailyScanStatsUseCase;

use crate::api::analytics::dto::DailyScanStatsResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AnalyticsApi {
    daily_stats_use_case: Arc<dyn GetDailyScanStatsUseCase>,
}

impl AnalyticsApi {
    pub fn new(daily_stats_use_case: Arc<dyn GetDailyScanStatsUseCase>) -> Self {
        Self {
            daily_stats_use_case,
        }
    }
}

/// Scan analytics API
#[OpenApi]
impl AnalyticsApi {
    /// Count catalog resolutions per day
    ///
    /// Days without scans are omitted; the list is ordered oldest first.
    #[oai(path = "/scanner/stats/daily", method = "get", tag = "ApiTags::Analytics")]
    async fn daily_stats(&self) -> DailyStatsApiResponse {
        match self.daily_stats_use_case.execute().await {
            Ok(counts) => DailyStatsApiResponse::Ok(Json(counts.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DailyStatsApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DailyStatsApiResponse {
    #[oai(status = 200)]
    Ok(Json<DailyScanStatsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::analytics::model::DailyScanCount;
    use business::domain::errors::RepositoryError;
    use chrono::NaiveDate;
    use mockall::mock;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    mock! {
        pub DailyStats {}

        #[async_trait]
        impl GetDailyScanStatsUseCase for DailyStats {
            async fn execute(&self) -> Result<Vec<DailyScanCount>, RepositoryError>;
        }
    }

    fn client(stats: MockDailyStats) -> TestClient<Route> {
        let api = AnalyticsApi::new(Arc::new(stats));
        TestClient::new(Route::new().nest("/", OpenApiService::new(api, "Analytics", "test")))
    }

    #[tokio::test]
    async fn should_list_daily_counts_oldest_first() {
        let mut stats = MockDailyStats::new();
        stats.expect_execute().returning(|| {
            Ok(vec![
                DailyScanCount {
                    date: NaiveDate::from_ymd_opt(2025, 3, 13).unwrap(),
                    scan_count: 4,
                },
                DailyScanCount {
                    date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                    scan_count: 11,
                },
            ])
        });
        let cli = client(stats);

        let resp = cli.get("/scanner/stats/daily").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let data = json.value().object().get("data").array();
        data.assert_len(2);
        data.get(0).object().get("date").assert_string("2025-03-13");
        data.get(1).object().get("scanCount").assert_i64(11);
    }

    #[tokio::test]
    async fn should_return_empty_list_without_scans() {
        let mut stats = MockDailyStats::new();
        stats.expect_execute().returning(|| Ok(vec![]));
        let cli = client(stats);

        let resp = cli.get("/scanner/stats/daily").send().await;

        resp.assert_status_is_ok();
        resp.json().await.value().object().get("data").array().assert_is_empty();
    }

    #[tokio::test]
    async fn should_return_internal_error_when_stats_fail() {
        let mut stats = MockDailyStats::new();
        stats
            .expect_execute()
            .returning(|| Err(RepositoryError::DatabaseError));
        let cli = client(stats);

        let resp = cli.get("/scanner/stats/daily").send().await;

        resp.assert_status(poem::http::StatusCode::INTERNAL_SERVER_ERROR);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("analytics.stats_failed");
    }
}
