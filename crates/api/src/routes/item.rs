use axum::routing::get;
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Item routes, mounted at `/items`.
///
/// ```text
/// GET  /          list (cursor paginated)
/// GET  /{id}      get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item::list))
        .route("/{id}", get(item::get_by_id))
}
