//! Handlers for the `/stock-out` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_db::models::stock_out::{CreateStockOut, StockOutRecord, TransitionOutcome};
use stockroom_db::repositories::StockOutRepo;
use stockroom_events::bus::{InventoryEvent, STOCK_DEPLOYED};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::MaybeAuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/stock-out
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<StockOutRecord>>>> {
    let records = StockOutRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(records)))
}

/// POST /api/v1/stock-out
///
/// Moves a unit out of stock into deployment history. A `stock_id` that
/// was already moved is reported as 404.
pub async fn create(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    JsonBody(input): JsonBody<CreateStockOut>,
) -> AppResult<(StatusCode, Json<ApiResponse<StockOutRecord>>)> {
    input.validate()?;

    let record = match StockOutRepo::transition(&state.pool, &input).await? {
        TransitionOutcome::Deployed(record) => record,
        TransitionOutcome::StockNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "StockUnit",
                id: input.stock_id,
            }));
        }
        TransitionOutcome::ItemMismatch { stock_item_id } => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Stock unit {} belongs to item {stock_item_id}, not {}",
                input.stock_id,
                input.item_id.unwrap_or_default()
            ))));
        }
    };

    state.event_bus.publish(
        InventoryEvent::new(STOCK_DEPLOYED)
            .with_entity("stock", record.stock_id)
            .with_actor(auth.user_id())
            .with_payload(serde_json::json!({
                "stock_out_id": record.id,
                "item_id": record.item_id,
                "staff_id": record.staff_id,
                "deployment_location": record.deployment_location,
            })),
    );
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record))))
}
