use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Panic handler for [`tower_http::catch_panic::CatchPanicLayer::custom`].
///
/// Logs the panic payload and answers with the standard 500 error envelope,
/// so a crashing handler still produces `{"success":false,...}`.
pub fn recover_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
