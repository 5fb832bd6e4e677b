use tower::timeout::error::Elapsed;
use tower::BoxError;

use crate::error::AppError;

/// Error handler for the `tower::timeout` layer behind `HandleErrorLayer`.
///
/// An elapsed deadline becomes a 408 error envelope; any other middleware
/// error is reported as an internal error.
pub async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        AppError::Timeout
    } else {
        AppError::InternalError(format!("unhandled middleware error: {err}"))
    }
}
