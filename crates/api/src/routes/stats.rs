use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET    /            -> summary
/// GET    /locations   -> locations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stats::summary))
        .route("/locations", get(stats::locations))
}
