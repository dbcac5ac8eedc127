//! Handler for the `/inventory` aggregate.

use axum::extract::State;
use axum::Json;
use stockroom_core::inventory::{build_inventory, InventoryView};
use stockroom_db::models::item::Item;
use stockroom_db::models::stock::StockUnit;
use stockroom_db::repositories::{ItemRepo, StockRepo};
use stockroom_db::DbPool;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

pub type ItemInventory = InventoryView<Item, StockUnit>;

/// Load the full catalog and the full stock table.
///
/// Shared by every handler that aggregates over current stock.
pub(crate) async fn load_catalog_and_stock(
    pool: &DbPool,
) -> Result<(Vec<Item>, Vec<StockUnit>), sqlx::Error> {
    tokio::try_join!(ItemRepo::list(pool), StockRepo::list_units(pool))
}

/// GET /api/v1/inventory
///
/// One entry per item, newest item first, each with its units and quantity.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ItemInventory>>>> {
    let (items, stock) = load_catalog_and_stock(&state.pool).await?;
    Ok(Json(ApiResponse::ok(build_inventory(items, stock))))
}
