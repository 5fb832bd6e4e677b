//! Output stream abstraction used by serializers.
//!
//! A [`ResponseWriter`] accepts exactly one header set, one status line and
//! one body per response. [`BufferedResponse`] is the axum-backed
//! implementation: it collects those pieces and turns them into an
//! [`axum::response::Response`].

use std::io;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

/// Destination a serializer writes an encoded envelope onto.
///
/// Headers must be set before the status line, and the status line must be
/// written before the body.
pub trait ResponseWriter {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, body: Bytes) -> io::Result<()>;

    /// Whether a status line has already been written.
    fn is_committed(&self) -> bool;
}

/// In-memory response that becomes an axum [`Response`].
///
/// Once the status is written, further header or status writes are ignored
/// (and logged). A response with nothing written at all converts into a
/// bare `500 Internal Server Error`, so a request whose error envelope could
/// not be encoded still gets a well-formed HTTP reply.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

impl ResponseWriter for BufferedResponse {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if let Some(status) = self.status {
            tracing::warn!(%name, %status, "Header set after status line, ignored");
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if let Some(existing) = self.status {
            tracing::warn!(%existing, %status, "Superfluous status write ignored");
            return;
        }
        self.status = Some(status);
    }

    fn write_body(&mut self, body: Bytes) -> io::Result<()> {
        if self.body.is_some() {
            return Err(io::Error::other("response body already written"));
        }
        // A body without an explicit status implies 200, as on any HTTP stream.
        self.status.get_or_insert(StatusCode::OK);
        self.body = Some(body);
        Ok(())
    }

    fn is_committed(&self) -> bool {
        self.status.is_some()
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        let Some(status) = self.status else {
            tracing::error!("Response closed before anything was written, sending bare 500");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        };

        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}
