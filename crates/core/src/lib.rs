//! Response envelope domain types.
//!
//! Pure construction of the `{ "success": ..., "result" | "error": ... }`
//! wrapper placed around every REST response, plus the error taxonomy
//! shared by callers and the emission path. Nothing here touches HTTP.

pub mod envelope;
pub mod error;

pub use envelope::Envelope;
pub use error::{CoreError, EmitError};
