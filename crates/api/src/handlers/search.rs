//! Handler for `/search`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use stockroom_core::inventory::build_inventory;
use stockroom_core::search::{SearchLocation, SearchQuery};
use stockroom_db::models::stock_out::StockOutRecord;
use stockroom_db::repositories::StockOutRepo;

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::handlers::inventory::{load_catalog_and_stock, ItemInventory};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub term: String,
    /// Exact category; empty or absent means every category.
    pub category: Option<String>,
}

/// Where the term was found plus the matching rows from both listings.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub location: SearchLocation,
    pub inventory: Vec<ItemInventory>,
    pub stock_out: Vec<StockOutRecord>,
}

/// GET /api/v1/search?term=&category=
pub async fn search(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> AppResult<Json<ApiResponse<SearchResults>>> {
    let query = SearchQuery::new(params.term.trim(), params.category.as_deref());

    let ((items, stock), history) = tokio::try_join!(
        load_catalog_and_stock(&state.pool),
        StockOutRepo::list(&state.pool)
    )?;
    let inventory = build_inventory(items, stock);

    let location = query.locate(&inventory, &history);
    let results = SearchResults {
        location,
        inventory: query.filter_inventory(&inventory).into_iter().cloned().collect(),
        stock_out: query.filter_deployments(&history).into_iter().cloned().collect(),
    };

    tracing::debug!(
        term = query.term(),
        category = ?query.category(),
        location = ?results.location,
        "Search completed"
    );
    Ok(Json(ApiResponse::ok(results)))
}
