use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::dispatch::send_json;
use crate::writer::BufferedResponse;

/// Answers unmatched routes with a 404 error envelope.
pub async fn not_found(uri: Uri) -> Response {
    error_envelope(
        &format!("No route for {}", uri.path()),
        StatusCode::NOT_FOUND,
    )
}

/// Answers a known route called with an unsupported method with a 405
/// error envelope.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    error_envelope(
        &format!("Method {method} not allowed for {}", uri.path()),
        StatusCode::METHOD_NOT_ALLOWED,
    )
}

fn error_envelope(message: &str, status: StatusCode) -> Response {
    let mut writer = BufferedResponse::new();
    if let Err(err) = send_json(&mut writer, (), "", Some(&message), status.as_u16()) {
        tracing::error!(error = %err, %status, "Failed to emit fallback envelope");
    }
    writer.into_response()
}
