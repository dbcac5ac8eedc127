//! Handlers for the `/stats` aggregates.

use axum::extract::State;
use axum::Json;
use stockroom_core::stats::{compute_stats, location_counts, LocationCount, StatsSummary};
use stockroom_db::repositories::StockRepo;

use crate::error::AppResult;
use crate::handlers::inventory::load_catalog_and_stock;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/stats
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<ApiResponse<StatsSummary>>> {
    let (items, stock) = load_catalog_and_stock(&state.pool).await?;
    Ok(Json(ApiResponse::ok(compute_stats(&items, &stock))))
}

/// GET /api/v1/stats/locations
///
/// Units in stock per location, busiest first. Blank locations are
/// grouped as `"Unknown"`.
pub async fn locations(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<LocationCount>>>> {
    let stock = StockRepo::list_units(&state.pool).await?;
    Ok(Json(ApiResponse::ok(location_counts(&stock))))
}
