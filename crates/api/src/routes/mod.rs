pub mod health;
pub mod item;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                  list items (?cursor=&limit=)
/// /items/{id}             get item
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/items", item::router())
}
