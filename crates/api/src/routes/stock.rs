//! Route definitions for the `/stock` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stock;
use crate::state::AppState;

/// Routes mounted at `/stock`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (batch)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stock::list).post(stock::create))
        .route(
            "/{id}",
            get(stock::get_by_id)
                .put(stock::update)
                .delete(stock::delete),
        )
}
