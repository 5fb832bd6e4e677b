//! Response-level middleware.
//!
//! - [`panic::recover_panic`] -- Turns a handler panic into a 500 error envelope.
//! - [`timeout::handle_timeout`] -- Turns an elapsed request deadline into a 408 error envelope.

pub mod panic;
pub mod timeout;
