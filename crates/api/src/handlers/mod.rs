//! Request handlers.
//!
//! Handlers return [`Reply`](crate::reply::Reply) on success and
//! [`AppError`](crate::error::AppError) on failure; both render through the
//! response envelope, so no handler builds an envelope itself.

pub mod fallback;
pub mod item;
