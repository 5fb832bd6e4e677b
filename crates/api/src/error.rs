use axum::response::{IntoResponse, Response};
use restwrap_core::CoreError;

use crate::dispatch::Responder;
use crate::writer::BufferedResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] by emitting an error envelope through the
/// dispatcher, so every failure reaches the client as
/// `{"success":false,"error":...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `restwrap_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("{0}")]
    BadRequest(String),

    /// The request did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Status hint and client-facing message for this error.
    ///
    /// The message is the error's `Display` text, the same text the
    /// dispatcher puts in any error envelope. Internal errors are the one
    /// exception: they are logged here and replaced with a generic message.
    fn classify(&self) -> (u16, String) {
        match self {
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                (500, INTERNAL_MESSAGE.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (500, INTERNAL_MESSAGE.to_string())
            }
            AppError::Core(core) => (core.status_hint(), self.to_string()),
            AppError::BadRequest(_) => (400, self.to_string()),
            AppError::Timeout => (408, self.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();

        let mut writer = BufferedResponse::new();
        if let Err(err) = Responder::json().send(&mut writer, (), "", Some(&message), status) {
            tracing::error!(error = %err, "Failed to emit error envelope");
        }
        writer.into_response()
    }
}
