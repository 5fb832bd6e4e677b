//! Single entry point for emitting a response envelope.
//!
//! The dispatcher decides between the success and error envelope, fixes up
//! the status code, and hands the envelope to a [`ResponseSerializer`].
//! Error responses never go out with a status below 400.

use std::fmt;

use axum::http::StatusCode;
use restwrap_core::{EmitError, Envelope};
use serde::Serialize;

use crate::serializer::{JsonSerializer, ResponseSerializer};
use crate::writer::ResponseWriter;

/// Status used for an error response given the caller's hint.
///
/// Hints below 400 (including an unset `0`) become 500; so do hints that
/// are not valid HTTP status codes.
pub fn clamp_error_status(hint: u16) -> StatusCode {
    if hint < 400 {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    StatusCode::from_u16(hint).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Status used for a success response: the hint verbatim when it is a valid
/// HTTP status code, otherwise 200.
fn success_status(hint: u16) -> StatusCode {
    StatusCode::from_u16(hint).unwrap_or_else(|_| {
        tracing::warn!(hint, "Invalid success status hint, using 200");
        StatusCode::OK
    })
}

/// Emits envelopes through a fixed serializer.
///
/// `Responder::default()` (or [`Responder::json`]) uses [`JsonSerializer`].
#[derive(Debug, Clone)]
pub struct Responder<S = JsonSerializer> {
    serializer: S,
}

impl Responder<JsonSerializer> {
    pub fn json() -> Self {
        Self::new(JsonSerializer)
    }
}

impl Default for Responder<JsonSerializer> {
    fn default() -> Self {
        Self::json()
    }
}

impl<S: ResponseSerializer> Responder<S> {
    pub fn new(serializer: S) -> Self {
        Self { serializer }
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Send `err` as an error envelope if present, otherwise `result` (with
    /// `cursor` when non-empty) as a success envelope.
    ///
    /// The success status is `status_hint` unchanged; the error status goes
    /// through [`clamp_error_status`].
    pub fn send<W, T>(
        &self,
        writer: &mut W,
        result: T,
        cursor: &str,
        err: Option<&dyn fmt::Display>,
        status_hint: u16,
    ) -> Result<(), EmitError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
    {
        dispatch(&self.serializer, writer, result, cursor, err, status_hint)
    }

    /// Same as [`send`](Self::send), taking the outcome as a `Result`.
    pub fn send_outcome<W, T, E>(
        &self,
        writer: &mut W,
        outcome: Result<T, E>,
        cursor: &str,
        status_hint: u16,
    ) -> Result<(), EmitError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
        E: fmt::Display,
    {
        match outcome {
            Ok(result) => self.send(writer, result, cursor, None, status_hint),
            Err(err) => self.send(writer, (), cursor, Some(&err), status_hint),
        }
    }
}

/// Dispatch with an optional serializer; `None` falls back to JSON.
pub fn send<S, W, T>(
    serializer: Option<&S>,
    writer: &mut W,
    result: T,
    cursor: &str,
    err: Option<&dyn fmt::Display>,
    status_hint: u16,
) -> Result<(), EmitError>
where
    S: ResponseSerializer,
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    match serializer {
        Some(serializer) => dispatch(serializer, writer, result, cursor, err, status_hint),
        None => send_json(writer, result, cursor, err, status_hint),
    }
}

/// Dispatch through [`JsonSerializer`].
pub fn send_json<W, T>(
    writer: &mut W,
    result: T,
    cursor: &str,
    err: Option<&dyn fmt::Display>,
    status_hint: u16,
) -> Result<(), EmitError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    dispatch(&JsonSerializer, writer, result, cursor, err, status_hint)
}

fn dispatch<S, W, T>(
    serializer: &S,
    writer: &mut W,
    result: T,
    cursor: &str,
    err: Option<&dyn fmt::Display>,
    status_hint: u16,
) -> Result<(), EmitError>
where
    S: ResponseSerializer,
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    if let Some(err) = err {
        let status = clamp_error_status(status_hint);
        if status.as_u16() != status_hint {
            tracing::debug!(
                status_hint,
                %status,
                "Error status hint is not a valid error status, using 500"
            );
        }
        return serializer.send_error(writer, err, status);
    }

    let envelope = Envelope::success(result, cursor);
    serializer.send_success(writer, &envelope, success_status(status_hint))
}
