//! Handlers for the `/stock` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_db::models::stock::{CreateStockBatch, StockUnitDetail, UpdateStockUnit};
use stockroom_db::repositories::{ItemRepo, StockRepo};
use stockroom_events::bus::{InventoryEvent, STOCK_CREATED, STOCK_DELETED, STOCK_UPDATED};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::middleware::auth::MaybeAuthUser;
use crate::response::{ApiResponse, Deleted};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "StockUnit",
        id,
    })
}

/// POST /api/v1/stock
///
/// Adds every entry as a separate unit of `item_id`, all or nothing.
pub async fn create(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    JsonBody(input): JsonBody<CreateStockBatch>,
) -> AppResult<(StatusCode, Json<ApiResponse<Vec<StockUnitDetail>>>)> {
    input.validate()?;

    ItemRepo::find_by_id(&state.pool, input.item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Item",
            id: input.item_id,
        }))?;

    let created = StockRepo::create_batch(&state.pool, &input).await?;

    for unit in &created {
        state.event_bus.publish(
            InventoryEvent::new(STOCK_CREATED)
                .with_entity("stock", unit.unit.id)
                .with_actor(auth.user_id())
                .with_payload(serde_json::json!({ "item_id": unit.unit.item_id })),
        );
    }
    tracing::debug!(item_id = input.item_id, count = created.len(), "Stock batch added");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// GET /api/v1/stock
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<StockUnitDetail>>>> {
    let units = StockRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(units)))
}

/// GET /api/v1/stock/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ApiResponse<StockUnitDetail>>> {
    let unit = StockRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok(unit)))
}

/// PUT /api/v1/stock/{id}
///
/// Full replacement: fields missing from the body are cleared.
pub async fn update(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateStockUnit>,
) -> AppResult<Json<ApiResponse<StockUnitDetail>>> {
    input.validate()?;
    let unit = StockRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.event_bus.publish(
        InventoryEvent::new(STOCK_UPDATED)
            .with_entity("stock", id)
            .with_actor(auth.user_id()),
    );
    Ok(Json(ApiResponse::ok(unit)))
}

/// DELETE /api/v1/stock/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    if !StockRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    state.event_bus.publish(
        InventoryEvent::new(STOCK_DELETED)
            .with_entity("stock", id)
            .with_actor(auth.user_id()),
    );
    Ok(Json(ApiResponse::ok(Deleted::new(id))))
}
