use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::analytics::model::{DailyScanCount, ScanEvent};
use business::domain::analytics::repository::ScanEventRepository;
use business::domain::errors::RepositoryError;

use super::entity::{DailyScanCountRow, ScanEventEntity};

pub struct ScanEventRepositoryPostgres {
    pool: PgPool,
}

impl ScanEventRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScanEventRepository for ScanEventRepositoryPostgres {
    async fn record(&self, event: &ScanEvent) -> Result<(), RepositoryError> {
        let entity = ScanEventEntity::from_domain(event);

        sqlx::query(
            "INSERT INTO barcode_scan_events (barcode, success, source, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&entity.barcode)
        .bind(entity.success)
        .bind(&entity.source)
        .bind(entity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to insert scan event: {}", err);
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn daily_counts(&self) -> Result<Vec<DailyScanCount>, RepositoryError> {
        let rows = sqlx::query_as::<_, DailyScanCountRow>(
            r#"SELECT (created_at AT TIME ZONE 'UTC')::date AS scan_date, COUNT(id) AS scan_count
            FROM barcode_scan_events
            GROUP BY scan_date
            ORDER BY scan_date"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to aggregate scan events: {}", err);
            RepositoryError::DatabaseError
        })?;

        Ok(rows.into_iter().map(DailyScanCountRow::into_domain).collect())
    }
}
