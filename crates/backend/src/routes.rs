use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::shared::data::DatasetStore;

/// Конфигурация всех роутов приложения
pub fn configure_routes(store: DatasetStore) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Sales Analysis Dashboard
        .route(
            "/api/d400/filter_options",
            get(handlers::d400_sales_analysis::get_filter_options),
        )
        .route(
            "/api/d400/sales_analysis",
            get(handlers::d400_sales_analysis::get_sales_analysis),
        )
        .route(
            "/api/d400/reload",
            post(handlers::d400_sales_analysis::reload_dataset),
        )
        .with_state(store)
}
