use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analytics::model::DailyScanCount;
use crate::domain::analytics::repository::ScanEventRepository;
use crate::domain::analytics::use_cases::daily_stats::GetDailyScanStatsUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetDailyScanStatsUseCaseImpl {
    pub repository: Arc<dyn ScanEventRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDailyScanStatsUseCase for GetDailyScanStatsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<DailyScanCount>, RepositoryError> {
        self.logger.info("Fetching daily scan stats");

        match self.repository.daily_counts().await {
            Ok(stats) => Ok(stats),
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch daily scan stats: {}", err));
                Err(err)
            }
        }
    }
}
