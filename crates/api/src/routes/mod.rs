pub mod health;
pub mod items;
pub mod stats;
pub mod stock;
pub mod stock_out;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/register                 register (POST)
/// /users/login                    login (POST)
/// /users/current                  current user from bearer token (GET)
///
/// /items                          list, create
/// /items/{id}                     get, delete
///
/// /stock                          list, batch create
/// /stock/{id}                     get, update, delete
///
/// /stock-out                      list history, move a unit out of stock
///
/// /inventory                      items with nested stock and quantity
/// /stats                          summary counters
/// /stats/locations                units per location
/// /search                         search and locate (?term=&category=)
/// /reports/{kind}                 summary | detailed | low-stock
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/items", items::router())
        .nest("/stock", stock::router())
        .nest("/stock-out", stock_out::router())
        .nest("/stats", stats::router())
        .route("/inventory", get(handlers::inventory::list))
        .route("/search", get(handlers::search::search))
        .route("/reports/{kind}", get(handlers::reports::generate))
}
