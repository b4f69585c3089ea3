use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d400_sales_analysis::{
    FilterOptions, ReloadResponse, SalesAnalysisQuery, SalesAnalysisResponse,
};

use crate::dashboards::d400_sales_analysis::service;
use crate::shared::data::DatasetStore;

/// GET /api/d400/sales_analysis?cities=Bogotá,Cali&category=All&limit=100
pub async fn get_sales_analysis(
    State(store): State<DatasetStore>,
    Query(query): Query<SalesAnalysisQuery>,
) -> Result<Json<SalesAnalysisResponse>, StatusCode> {
    tracing::debug!("D400 Dashboard: sales analysis request {:?}", query);

    let dataset = store.current().await;
    match service::get_sales_analysis(&dataset, &query) {
        Ok(response) => {
            tracing::info!(
                "D400 Dashboard: {} of {} rows match ({} cities, category {})",
                response.kpis.total_transactions,
                dataset.len(),
                response.cities.len(),
                response.category.code()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!("D400 Dashboard: rejected filter: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// GET /api/d400/filter_options
pub async fn get_filter_options(State(store): State<DatasetStore>) -> Json<FilterOptions> {
    let dataset = store.current().await;
    let options = service::get_filter_options(&dataset);
    tracing::debug!(
        "D400 Dashboard: {} cities, {} category options",
        options.cities.len(),
        options.categories.len()
    );
    Json(options)
}

/// POST /api/d400/reload
pub async fn reload_dataset(
    State(store): State<DatasetStore>,
) -> Result<Json<ReloadResponse>, StatusCode> {
    match store.reload().await {
        Ok(dataset) => Ok(Json(ReloadResponse {
            rows: dataset.len(),
            source_path: dataset.source_path.display().to_string(),
            loaded_at: dataset.loaded_at,
        })),
        Err(e) => {
            tracing::error!(
                "D400 Dashboard: failed to reload {}: {:#}",
                store.source_path().display(),
                e
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
