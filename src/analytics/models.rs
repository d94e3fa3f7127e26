use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::engine::AverageResult;

/// All-time average for one category or type
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageSummaryResponse {
    /// Category or type id
    #[schema(example = 6)]
    pub dimension_id: i32,
    /// Display name; empty when the id is not in the catalog
    #[schema(example = "Grocery")]
    pub dimension_name: String,
    /// Unweighted mean of the monthly averages
    #[schema(example = 225.0)]
    pub average: f64,
}

impl From<AverageResult> for AverageSummaryResponse {
    fn from(r: AverageResult) -> Self {
        Self {
            dimension_id: r.dimension_id,
            dimension_name: r.dimension_name,
            average: r.average,
        }
    }
}

/// Average for one category or type in one calendar month
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageTrendResponse {
    #[schema(example = 6)]
    pub dimension_id: i32,
    #[schema(example = "Grocery")]
    pub dimension_name: String,
    /// First day of the month, midnight UTC
    pub month: DateTime<Utc>,
    #[schema(example = 150.0)]
    pub average: f64,
}

impl AverageTrendResponse {
    pub fn from_result(r: AverageResult) -> Option<Self> {
        Some(Self {
            dimension_id: r.dimension_id,
            dimension_name: r.dimension_name,
            month: r.month?,
            average: r.average,
        })
    }
}
