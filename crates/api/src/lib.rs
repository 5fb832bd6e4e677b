//! Restwrap API server library.
//!
//! Exposes the response emission path (writer, serializer, dispatcher) and
//! the server building blocks (config, state, error handling, routes) so
//! integration tests and the binary entrypoint can both access them.

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod reply;
pub mod router;
pub mod routes;
pub mod serializer;
pub mod state;
pub mod writer;

pub use dispatch::{send, send_json, Responder};
pub use reply::Reply;
pub use serializer::{JsonSerializer, ResponseSerializer};
pub use writer::{BufferedResponse, ResponseWriter};
