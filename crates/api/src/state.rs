use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: stockroom_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Inventory events are published here after each successful write.
    pub event_bus: Arc<stockroom_events::EventBus>,
}
