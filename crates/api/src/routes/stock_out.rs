use axum::routing::get;
use axum::Router;

use crate::handlers::stock_out;
use crate::state::AppState;

/// Routes mounted at `/stock-out`.
///
/// ```text
/// GET    /    -> list
/// POST   /    -> create (stock-out transition)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stock_out::list).post(stock_out::create))
}
