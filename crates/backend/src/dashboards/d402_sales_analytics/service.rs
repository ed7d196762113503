use contracts::dashboards::d402_sales_analytics::{
    AggregatedPoint, ChartDataRequest, ChartDataResponse, FieldValuesRequest, HistogramRequest,
    HistogramResponse, SalesRecord, SalesSummary, SummariesResponse, SummaryRequest, TopRequest,
};
use thiserror::Error;

use crate::shared::analytics;
use crate::shared::config::DashboardConfig;

/// Upper bound for histogram bins accepted from requests
pub const MAX_BINS: usize = 100;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("bins must be between 1 and 100, got {0}")]
    InvalidBins(usize),

    #[error("limit must be at least 1")]
    InvalidLimit,

    #[error("field name must not be empty")]
    EmptyField,
}

/// Years present in the data, ascending
pub fn get_years(records: &[SalesRecord]) -> Vec<i32> {
    analytics::available_years(records)
}

/// Summary card for a single year
pub fn get_summary(records: &[SalesRecord], request: &SummaryRequest) -> SalesSummary {
    analytics::summarize(records, request.year)
}

/// Summary cards for every year in the data
pub fn get_summaries(records: &[SalesRecord]) -> SummariesResponse {
    SummariesResponse {
        summaries: analytics::summarize_all(records),
    }
}

/// Chart series grouped by the requested dimension, cut at the sales threshold
pub fn get_chart_data(
    records: &[SalesRecord],
    request: &ChartDataRequest,
    settings: &DashboardConfig,
) -> ChartDataResponse {
    let filtered = analytics::apply_filter(records, &request.filter);
    let points =
        analytics::aggregate_by_dimension(filtered, request.dimension, request.measure);
    let threshold = request.threshold.unwrap_or(settings.threshold);
    let (points, hidden_by_threshold) = analytics::apply_threshold(points, threshold);

    ChartDataResponse {
        dimension: request.dimension,
        measure: request.measure,
        points,
        hidden_by_threshold,
    }
}

/// Best groups of a dimension, highest first
pub fn get_top(
    records: &[SalesRecord],
    request: &TopRequest,
    settings: &DashboardConfig,
) -> Result<Vec<AggregatedPoint>, DashboardError> {
    let limit = request.limit.unwrap_or(settings.top_limit);
    if limit == 0 {
        return Err(DashboardError::InvalidLimit);
    }

    let filtered = analytics::apply_filter(records, &request.filter);
    let points =
        analytics::aggregate_by_dimension(filtered, request.dimension, request.measure);
    Ok(analytics::top_n(&points, limit))
}

/// Histogram of a numeric record field
pub fn get_histogram(
    records: &[SalesRecord],
    request: &HistogramRequest,
    settings: &DashboardConfig,
) -> Result<HistogramResponse, DashboardError> {
    let field = request.field.trim();
    if field.is_empty() {
        return Err(DashboardError::EmptyField);
    }
    let bins = request.bins.unwrap_or(settings.histogram_bins);
    if bins == 0 || bins > MAX_BINS {
        return Err(DashboardError::InvalidBins(bins));
    }

    let filtered = analytics::apply_filter(records, &request.filter);
    let buckets = analytics::build_histogram_by_field(filtered, field, bins);

    Ok(HistogramResponse {
        field: field.to_string(),
        bins,
        buckets,
    })
}

/// Distinct values of a field, for selector options
pub fn get_field_values(
    records: &[SalesRecord],
    request: &FieldValuesRequest,
) -> Result<Vec<String>, DashboardError> {
    let field = request.field.trim();
    if field.is_empty() {
        return Err(DashboardError::EmptyField);
    }

    let filtered = analytics::apply_filter(records, &request.filter);
    Ok(analytics::distinct_values(filtered, field))
}
