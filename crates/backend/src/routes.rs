use axum::{
    routing::{get, post},
    Router,
};

use crate::api::{handlers, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D402 SALES ANALYTICS DASHBOARD
        // ========================================
        .route(
            "/api/d402/sales/years",
            get(handlers::d402_sales_analytics::get_years),
        )
        .route(
            "/api/d402/sales/summary",
            get(handlers::d402_sales_analytics::get_summary),
        )
        .route(
            "/api/d402/sales/summaries",
            get(handlers::d402_sales_analytics::get_summaries),
        )
        .route(
            "/api/d402/sales/chart",
            post(handlers::d402_sales_analytics::get_chart_data),
        )
        .route(
            "/api/d402/sales/top",
            post(handlers::d402_sales_analytics::get_top),
        )
        .route(
            "/api/d402/sales/histogram",
            post(handlers::d402_sales_analytics::get_histogram),
        )
        .route(
            "/api/d402/sales/values",
            post(handlers::d402_sales_analytics::get_field_values),
        )
        .with_state(state)
}
