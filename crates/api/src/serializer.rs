//! Pluggable wire formats for response envelopes.
//!
//! [`ResponseSerializer`] encodes an [`Envelope`] and transmits it on a
//! [`ResponseWriter`]. [`JsonSerializer`] is the production format.

use std::fmt;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use bytes::Bytes;
use restwrap_core::{EmitError, Envelope};
use serde::Serialize;

use crate::writer::ResponseWriter;

/// A wire format for response envelopes.
///
/// Implementors supply [`content_type`](Self::content_type) and
/// [`encode`](Self::encode); the provided `send_*` methods handle ordering
/// (header, then status, then body) and the success-path fallback.
pub trait ResponseSerializer: Send + Sync {
    /// `Content-Type` header value for this format.
    fn content_type(&self) -> &'static str;

    fn encode<T: Serialize>(&self, envelope: &Envelope<T>) -> Result<Bytes, EmitError>;

    /// Encode and transmit a success envelope with `status`.
    ///
    /// If the envelope cannot be encoded, nothing from it is written and an
    /// error envelope describing the encoding failure goes out with 500.
    fn send_success<W, T>(
        &self,
        writer: &mut W,
        envelope: &Envelope<T>,
        status: StatusCode,
    ) -> Result<(), EmitError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
    {
        match self.encode(envelope) {
            Ok(body) => self.transmit(writer, body, status),
            Err(err) => {
                tracing::warn!(error = %err, "Success envelope could not be encoded, sending 500");
                self.send_error(writer, &err, StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// Encode and transmit an error envelope built from `err`.
    ///
    /// There is no further fallback: if the error envelope itself cannot be
    /// encoded, nothing is written and the encoding failure is returned.
    fn send_error<W, E>(&self, writer: &mut W, err: &E, status: StatusCode) -> Result<(), EmitError>
    where
        W: ResponseWriter + ?Sized,
        E: fmt::Display + ?Sized,
    {
        let envelope = Envelope::<()>::error(err);
        let body = self.encode(&envelope).inspect_err(|encode_err| {
            tracing::error!(
                error = %encode_err,
                original = %err,
                "Error envelope could not be encoded, response left unwritten"
            );
        })?;
        self.transmit(writer, body, status)
    }

    /// Write the content type, `status` and `body`, in that order.
    fn transmit<W>(&self, writer: &mut W, body: Bytes, status: StatusCode) -> Result<(), EmitError>
    where
        W: ResponseWriter + ?Sized,
    {
        if writer.is_committed() {
            tracing::warn!(%status, "Response already committed, dropping envelope");
            return Err(EmitError::Committed);
        }

        writer.set_header(CONTENT_TYPE, HeaderValue::from_static(self.content_type()));
        writer.write_status(status);
        writer.write_body(body).map_err(|err| {
            tracing::warn!(error = %err, %status, "Failed to write response body");
            EmitError::Write(err)
        })
    }
}

/// Encodes envelopes as `application/json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl ResponseSerializer for JsonSerializer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode<T: Serialize>(&self, envelope: &Envelope<T>) -> Result<Bytes, EmitError> {
        Ok(Bytes::from(serde_json::to_vec(envelope)?))
    }
}
