/// Failures reported by business logic before a response is emitted.
///
/// Each variant carries the human-readable message that ends up in the
/// error envelope, and maps to a default HTTP status via
/// [`CoreError::status_hint`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// HTTP status a caller should hand to the dispatcher for this error.
    pub fn status_hint(&self) -> u16 {
        match self {
            CoreError::NotFound { .. } => 404,
            CoreError::Validation(_) => 400,
            CoreError::Conflict(_) => 409,
            CoreError::Unauthorized(_) => 401,
            CoreError::Forbidden(_) => 403,
            CoreError::Internal(_) => 500,
        }
    }
}

/// Failures while encoding or writing a response envelope.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The wire-format encoder rejected the envelope.
    #[error("failed to encode response: {0}")]
    Encode(String),

    /// The output stream rejected the body bytes.
    #[error("failed to write response body: {0}")]
    Write(#[from] std::io::Error),

    /// A status line was already written on this stream.
    #[error("response status already written")]
    Committed,
}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::Encode(err.to_string())
    }
}
