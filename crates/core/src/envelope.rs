//! The standard response envelope.
//!
//! Every response body is one of two shapes:
//!
//! ```text
//! {"success":true,"result":<payload>,"next":"<cursor>"}   // next only when paginating
//! {"success":false,"error":"<message>"}
//! ```
//!
//! [`Envelope`] is the typed form of those shapes. Serialization is written
//! by hand so the key order on the wire is fixed (`success` first).

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A success or error response wrapper.
///
/// Built fresh for each response and discarded after encoding.
///
/// # Examples
///
/// ```
/// use restwrap_core::Envelope;
///
/// let page = Envelope::success(vec![1, 2], "abc");
/// assert_eq!(
///     serde_json::to_string(&page).unwrap(),
///     r#"{"success":true,"result":[1,2],"next":"abc"}"#
/// );
///
/// let failed = Envelope::<()>::error("item not found");
/// assert_eq!(
///     serde_json::to_string(&failed).unwrap(),
///     r#"{"success":false,"error":"item not found"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success {
        result: T,
        /// Pagination cursor; never `Some("")`.
        next: Option<String>,
    },
    Error {
        error: String,
    },
}

impl<T> Envelope<T> {
    /// Wrap a payload. An empty `cursor` means there is no further page.
    pub fn success(result: T, cursor: &str) -> Self {
        let next = (!cursor.is_empty()).then(|| cursor.to_owned());
        Envelope::Success { result, next }
    }

    /// Wrap a failure, using its `Display` text as the message.
    pub fn error<E: fmt::Display + ?Sized>(err: &E) -> Self {
        Envelope::Error {
            error: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Envelope::Success { result, .. } => Some(result),
            Envelope::Error { .. } => None,
        }
    }

    pub fn next(&self) -> Option<&str> {
        match self {
            Envelope::Success { next, .. } => next.as_deref(),
            Envelope::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Error { error } => Some(error),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Success { result, next } => {
                let len = if next.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("Envelope", len)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("result", result)?;
                match next {
                    Some(cursor) => state.serialize_field("next", cursor)?,
                    None => state.skip_field("next")?,
                }
                state.end()
            }
            Envelope::Error { error } => {
                let mut state = serializer.serialize_struct("Envelope", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawEnvelope<T> {
    success: bool,
    #[serde(default, deserialize_with = "present")]
    result: Option<T>,
    next: Option<String>,
    error: Option<String>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Reads an envelope back from the wire, for HTTP clients and tests.
///
/// A success body must carry `result` (`null` is a valid payload). An error
/// body must carry `error` and must not carry `result` or `next`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;

        if !raw.success {
            if raw.result.is_some() {
                return Err(<D::Error as de::Error>::custom(
                    "error envelope must not contain `result`",
                ));
            }
            if raw.next.is_some() {
                return Err(<D::Error as de::Error>::custom(
                    "error envelope must not contain `next`",
                ));
            }
            return raw
                .error
                .map(|error| Envelope::Error { error })
                .ok_or_else(|| <D::Error as de::Error>::missing_field("error"));
        }

        let result = raw
            .result
            .ok_or_else(|| <D::Error as de::Error>::missing_field("result"))?;

        Ok(Envelope::Success {
            result,
            next: raw.next.filter(|cursor| !cursor.is_empty()),
        })
    }
}
