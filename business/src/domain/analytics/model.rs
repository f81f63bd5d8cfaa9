use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a scan ended up: the catalog that answered, or nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    LocalDatabase,
    ExternalApi,
    NotFound,
}

impl std::fmt::Display for ScanSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanSource::LocalDatabase => write!(f, "local_database"),
            ScanSource::ExternalApi => write!(f, "external_api"),
            ScanSource::NotFound => write!(f, "not_found"),
        }
    }
}

impl std::str::FromStr for ScanSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local_database" => Ok(ScanSource::LocalDatabase),
            "external_api" => Ok(ScanSource::ExternalApi),
            "not_found" => Ok(ScanSource::NotFound),
            _ => Err(format!("Invalid scan source: {}", s)),
        }
    }
}

/// One catalog resolution, recorded for usage statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEvent {
    pub barcode: String,
    pub success: bool,
    pub source: ScanSource,
    pub created_at: DateTime<Utc>,
}

impl ScanEvent {
    pub fn now(barcode: &str, success: bool, source: ScanSource) -> Self {
        Self {
            barcode: barcode.to_string(),
            success,
            source,
            created_at: Utc::now(),
        }
    }
}

/// Number of scans recorded on one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyScanCount {
    pub date: NaiveDate,
    pub scan_count: i64,
}
