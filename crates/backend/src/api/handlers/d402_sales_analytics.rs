use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d402_sales_analytics::{
    AggregatedPoint, ChartDataRequest, ChartDataResponse, FieldValuesRequest, HistogramRequest,
    HistogramResponse, SalesSummary, SummariesResponse, SummaryRequest, TopRequest,
};

use crate::api::AppState;
use crate::dashboards::d402_sales_analytics::service::{self, DashboardError};

fn bad_request(context: &str, e: DashboardError) -> StatusCode {
    tracing::warn!("D402 Dashboard: Rejected {} request: {}", context, e);
    StatusCode::BAD_REQUEST
}

/// GET /api/d402/sales/years
pub async fn get_years(State(state): State<AppState>) -> Json<Vec<i32>> {
    let years = service::get_years(state.store.records());
    tracing::info!("D402 Dashboard: Returning {} years", years.len());
    Json(years)
}

/// GET /api/d402/sales/summary?year=2024
pub async fn get_summary(
    State(state): State<AppState>,
    Query(request): Query<SummaryRequest>,
) -> Json<SalesSummary> {
    tracing::info!("D402 Dashboard: Getting sales summary for {}", request.year);
    let summary = service::get_summary(state.store.records(), &request);
    tracing::info!(
        "D402 Dashboard: {} orders in {}",
        summary.total_orders,
        summary.year
    );
    Json(summary)
}

/// GET /api/d402/sales/summaries
pub async fn get_summaries(State(state): State<AppState>) -> Json<SummariesResponse> {
    let response = service::get_summaries(state.store.records());
    tracing::info!(
        "D402 Dashboard: Returning {} yearly summaries",
        response.summaries.len()
    );
    Json(response)
}

/// POST /api/d402/sales/chart
pub async fn get_chart_data(
    State(state): State<AppState>,
    Json(request): Json<ChartDataRequest>,
) -> Json<ChartDataResponse> {
    tracing::info!(
        "D402 Dashboard: {} chart ({:?})",
        request.dimension.label(),
        request.measure
    );
    let response = service::get_chart_data(state.store.records(), &request, &state.settings);
    tracing::info!(
        "D402 Dashboard: Returning {} points, {} below threshold",
        response.points.len(),
        response.hidden_by_threshold
    );
    Json(response)
}

/// POST /api/d402/sales/top
pub async fn get_top(
    State(state): State<AppState>,
    Json(request): Json<TopRequest>,
) -> Result<Json<Vec<AggregatedPoint>>, StatusCode> {
    tracing::info!("D402 Dashboard: Top by {}", request.dimension.id());
    match service::get_top(state.store.records(), &request, &state.settings) {
        Ok(points) => Ok(Json(points)),
        Err(e) => Err(bad_request("top", e)),
    }
}

/// POST /api/d402/sales/histogram
pub async fn get_histogram(
    State(state): State<AppState>,
    Json(request): Json<HistogramRequest>,
) -> Result<Json<HistogramResponse>, StatusCode> {
    tracing::info!("D402 Dashboard: Histogram of '{}'", request.field);
    match service::get_histogram(state.store.records(), &request, &state.settings) {
        Ok(response) => {
            tracing::info!(
                "D402 Dashboard: Returning {} buckets",
                response.buckets.len()
            );
            Ok(Json(response))
        }
        Err(e) => Err(bad_request("histogram", e)),
    }
}

/// POST /api/d402/sales/values
pub async fn get_field_values(
    State(state): State<AppState>,
    Json(request): Json<FieldValuesRequest>,
) -> Result<Json<Vec<String>>, StatusCode> {
    match service::get_field_values(state.store.records(), &request) {
        Ok(values) => {
            tracing::info!(
                "D402 Dashboard: Returning {} values of '{}'",
                values.len(),
                request.field
            );
            Ok(Json(values))
        }
        Err(e) => Err(bad_request("values", e)),
    }
}
