use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use business::domain::analytics::model::{DailyScanCount, ScanEvent};

#[derive(Debug, FromRow)]
pub struct ScanEventEntity {
    pub barcode: String,
    pub success: bool,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl ScanEventEntity {
    pub fn from_domain(event: &ScanEvent) -> Self {
        Self {
            barcode: event.barcode.clone(),
            success: event.success,
            source: event.source.to_string(),
            created_at: event.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct DailyScanCountRow {
    pub scan_date: NaiveDate,
    pub scan_count: i64,
}

impl DailyScanCountRow {
    pub fn into_domain(self) -> DailyScanCount {
        DailyScanCount {
            date: self.scan_date,
            scan_count: self.scan_count,
        }
    }
}
