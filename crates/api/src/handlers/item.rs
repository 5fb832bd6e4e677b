//! Handlers for the `/items` resource.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use restwrap_core::CoreError;

use crate::catalog::Item;
use crate::error::{AppError, AppResult};
use crate::query::{encode_cursor, CursorParams};
use crate::reply::Reply;
use crate::state::AppState;

/// GET /api/v1/items?cursor=&limit=
///
/// Returns one page of items; `next` is set while more pages remain.
/// Malformed query strings are answered with a 400 error envelope.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<CursorParams>, QueryRejection>,
) -> AppResult<Reply<Vec<Item>>> {
    let Query(params) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let offset = params.offset()?;
    let limit = params.limit(state.config.default_page_size, state.config.max_page_size);

    let (items, next) = state.catalog.page(offset, limit);
    tracing::debug!(offset, limit, returned = items.len(), ?next, "Listed items");

    let reply = Reply::ok(items);
    Ok(match next {
        Some(next) => reply.with_cursor(encode_cursor(next)),
        None => reply,
    })
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Reply<Item>> {
    let Path(id) = path.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let item = state
        .catalog
        .find(id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Reply::ok(item))
}
