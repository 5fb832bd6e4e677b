use std::sync::Arc;

use crate::catalog::ItemCatalog;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (page sizes are read by listing handlers).
    pub config: Arc<ServerConfig>,
    /// Read-only item catalog served by the `/items` endpoints.
    pub catalog: Arc<ItemCatalog>,
}
