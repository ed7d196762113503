use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::analytics::{GroupDimension, Measure};

/// Label used for top category/region when a year has no records
pub const NOT_AVAILABLE: &str = "N/A";

/// Single sales record as supplied by the record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(default)]
    pub id: String,
    /// Calendar date in format "YYYY-MM-DD"
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub region: String,
    pub year: i32,
    /// Any additional source columns (e.g. "City", "Rating")
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SalesRecord {
    /// Parse `date`, ignoring a trailing time component if present
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let date_part = self.date.split('T').next().unwrap_or(&self.date);
        NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
    }

    /// 1-based month of `date`
    pub fn month(&self) -> Option<u32> {
        self.parsed_date().map(|d| d.month())
    }
}

/// One point of a chart series: group key and its reduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    pub name: String,
    pub value: f64,
}

impl AggregatedPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Per-year summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub year: i32,
    pub total_sales: f64,
    pub total_orders: usize,
    /// Rounded to 2 decimal places, 0 when there are no orders
    pub average_order_value: f64,
    pub top_category: String,
    pub top_region: String,
}

impl SalesSummary {
    /// Summary of a year without records
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            total_sales: 0.0,
            total_orders: 0,
            average_order_value: 0.0,
            top_category: NOT_AVAILABLE.to_string(),
            top_region: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Histogram bin, labelled "<low>-<high>" with one decimal place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub range: String,
    pub count: usize,
}

/// Record filter applied before aggregation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesFilter {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    /// Arbitrary field name for an equality filter (e.g. "City")
    #[serde(default)]
    pub field: Option<String>,
    /// Expected value of `field`
    #[serde(default)]
    pub value: Option<String>,
}

impl SalesFilter {
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// GET /api/d402/sales/summary?year=2024
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub year: i32,
}

/// Response with one summary per year present in the data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummariesResponse {
    pub summaries: Vec<SalesSummary>,
}

/// Request for a chart series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataRequest {
    pub dimension: GroupDimension,
    #[serde(default)]
    pub measure: Measure,
    #[serde(default)]
    pub filter: SalesFilter,
    /// Minimum point value to keep (sales threshold)
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Chart series after threshold filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataResponse {
    pub dimension: GroupDimension,
    pub measure: Measure,
    pub points: Vec<AggregatedPoint>,
    /// Number of groups dropped by the threshold
    pub hidden_by_threshold: usize,
}

/// Request for the top-N groups of a dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopRequest {
    pub dimension: GroupDimension,
    #[serde(default)]
    pub measure: Measure,
    #[serde(default)]
    pub filter: SalesFilter,
    /// Defaults to the configured top limit
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request for a histogram of a numeric field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramRequest {
    #[serde(default = "default_histogram_field")]
    pub field: String,
    /// Defaults to the configured bin count
    #[serde(default)]
    pub bins: Option<usize>,
    #[serde(default)]
    pub filter: SalesFilter,
}

fn default_histogram_field() -> String {
    "amount".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramResponse {
    pub field: String,
    pub bins: usize,
    pub buckets: Vec<HistogramBucket>,
}

/// Request for the distinct values of a field (selector options)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValuesRequest {
    pub field: String,
    #[serde(default)]
    pub filter: SalesFilter,
}
