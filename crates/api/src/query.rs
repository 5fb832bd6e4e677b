//! Shared query parameter types for API handlers.

use serde::Deserialize;

use crate::error::AppError;

/// Cursor pagination parameters (`?cursor=&limit=`).
///
/// The cursor is the opaque token returned as `next` in a previous page.
#[derive(Debug, Default, Deserialize)]
pub struct CursorParams {
    #[serde(default)]
    pub cursor: String,
    pub limit: Option<usize>,
}

impl CursorParams {
    /// Position the cursor points at; an empty cursor is the first page.
    pub fn offset(&self) -> Result<usize, AppError> {
        decode_cursor(&self.cursor)
    }

    /// Requested page size, defaulted and clamped to `1..=max`.
    pub fn limit(&self, default: usize, max: usize) -> usize {
        clamp_limit(self.limit, default, max)
    }
}

/// Clamp an optional page size into `1..=max`, using `default` when unset.
pub fn clamp_limit(limit: Option<usize>, default: usize, max: usize) -> usize {
    let max = max.max(1);
    limit.unwrap_or(default).clamp(1, max)
}

/// Encode a page position as a cursor token.
pub fn encode_cursor(offset: usize) -> String {
    offset.to_string()
}

/// Decode a cursor token produced by [`encode_cursor`].
pub fn decode_cursor(cursor: &str) -> Result<usize, AppError> {
    if cursor.is_empty() {
        return Ok(0);
    }
    cursor
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid cursor: {cursor}")))
}
