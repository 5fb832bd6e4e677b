//! Success responses for handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::dispatch::Responder;
use crate::writer::BufferedResponse;

/// A handler result wrapped in the success envelope.
///
/// ```ignore
/// Ok(Reply::ok(items).with_cursor(next))
/// ```
#[derive(Debug)]
pub struct Reply<T> {
    result: T,
    cursor: String,
    status: StatusCode,
}

impl<T> Reply<T> {
    /// `200 OK` with no cursor.
    pub fn ok(result: T) -> Self {
        Self {
            result,
            cursor: String::new(),
            status: StatusCode::OK,
        }
    }

    /// `201 Created` with no cursor.
    pub fn created(result: T) -> Self {
        Self::ok(result).with_status(StatusCode::CREATED)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attach the cursor of the next page. An empty cursor means none.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let mut writer = BufferedResponse::new();
        if let Err(err) = Responder::json().send(
            &mut writer,
            self.result,
            &self.cursor,
            None,
            self.status.as_u16(),
        ) {
            tracing::error!(error = %err, "Failed to emit success envelope");
        }
        writer.into_response()
    }
}
