use async_trait::async_trait;

use crate::domain::analytics::model::DailyScanCount;
use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait GetDailyScanStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DailyScanCount>, RepositoryError>;
}
