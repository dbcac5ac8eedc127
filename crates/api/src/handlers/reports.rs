//! Handler for `/reports/{kind}`.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use stockroom_core::error::CoreError;
use stockroom_core::inventory::build_inventory;
use stockroom_core::report::{build_report, Report, ReportKind};
use stockroom_core::stats::compute_stats;

use crate::error::{AppError, AppResult};
use crate::extract::PathParam;
use crate::handlers::inventory::load_catalog_and_stock;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/reports/{kind}
///
/// `kind` is one of `summary`, `detailed`, `low-stock`.
pub async fn generate(
    State(state): State<AppState>,
    PathParam(kind): PathParam<String>,
) -> AppResult<Json<ApiResponse<Report>>> {
    let kind = ReportKind::from_str_value(&kind)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let (items, stock) = load_catalog_and_stock(&state.pool).await?;
    let stats = compute_stats(&items, &stock);
    let inventory = build_inventory(items, stock);

    Ok(Json(ApiResponse::ok(build_report(
        kind,
        &inventory,
        stats,
        Utc::now(),
    ))))
}
