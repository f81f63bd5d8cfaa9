use poem_openapi::Object;

use business::domain::analytics::model::DailyScanCount;

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct DailyScanCountDto {
    /// Calendar day in `YYYY-MM-DD` form (UTC).
    pub date: String,
    pub scan_count: i64,
}

impl From<DailyScanCount> for DailyScanCountDto {
    fn from(count: DailyScanCount) -> Self {
        Self {
            date: count.date.format("%Y-%m-%d").to_string(),
            scan_count: count.scan_count,
        }
    }
}

#[derive(Object, Debug)]
pub struct DailyScanStatsResponse {
    pub data: Vec<DailyScanCountDto>,
}

impl From<Vec<DailyScanCount>> for DailyScanStatsResponse {
    fn from(counts: Vec<DailyScanCount>) -> Self {
        Self {
            data: counts.into_iter().map(Into::into).collect(),
        }
    }
}
