//! Handlers for the `/items` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_db::models::item::{CreateItem, Item};
use stockroom_db::repositories::{ItemRepo, StockRepo};
use stockroom_events::bus::{InventoryEvent, ITEM_CREATED, ITEM_DELETED};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::middleware::auth::MaybeAuthUser;
use crate::response::{ApiResponse, Deleted};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

/// POST /api/v1/items
pub async fn create(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    JsonBody(input): JsonBody<CreateItem>,
) -> AppResult<(StatusCode, Json<ApiResponse<Item>>)> {
    input.validate()?;
    let item = ItemRepo::create(&state.pool, &input).await?;

    state.event_bus.publish(
        InventoryEvent::new(ITEM_CREATED)
            .with_entity("item", item.id)
            .with_actor(auth.user_id())
            .with_payload(serde_json::json!({
                "name": item.name,
                "category": item.category,
            })),
    );
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// GET /api/v1/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Item>>>> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ApiResponse<Item>>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/v1/items/{id}
///
/// Refused with 409 while stock units still reference the item. The
/// foreign key is `ON DELETE RESTRICT`, so a unit added between the check
/// and the delete also surfaces as 409.
pub async fn delete(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    let remaining = StockRepo::count_for_item(&state.pool, id).await?;
    if remaining > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Item {id} still has {remaining} unit(s) in stock"
        ))));
    }

    if !ItemRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    state.event_bus.publish(
        InventoryEvent::new(ITEM_DELETED)
            .with_entity("item", id)
            .with_actor(auth.user_id()),
    );
    Ok(Json(ApiResponse::ok(Deleted::new(id))))
}
