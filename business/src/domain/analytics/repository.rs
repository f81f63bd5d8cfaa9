use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{DailyScanCount, ScanEvent};

/// Append-only log of catalog resolutions.
#[async_trait]
pub trait ScanEventRepository: Send + Sync {
    async fn record(&self, event: &ScanEvent) -> Result<(), RepositoryError>;
    /// Scan counts grouped by UTC day, oldest first.
    async fn daily_counts(&self) -> Result<Vec<DailyScanCount>, RepositoryError>;
}
