#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use restwrap_api::catalog::ItemCatalog;
use restwrap_api::config::ServerConfig;
use restwrap_api::router::{build_app_router, build_router_with};
use restwrap_api::state::AppState;

/// Number of items in the test catalog.
pub const TEST_ITEMS: usize = 25;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a page size of 10 (max 20).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        default_page_size: 10,
        max_page_size: 20,
    }
}

pub fn test_state() -> AppState {
    AppState {
        config: Arc::new(test_config()),
        catalog: Arc::new(ItemCatalog::seeded(TEST_ITEMS)),
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app() -> Router {
    build_app_router(test_state(), &test_config())
}

/// Build the full application router with `extra` routes mounted under the
/// same middleware stack.
pub fn build_test_app_with(extra: Router<AppState>) -> Router {
    build_router_with(extra, test_state(), &test_config())
}

/// Build the full application router from `config`, with `extra` routes
/// mounted under the same middleware stack.
pub fn build_test_app_with_config(extra: Router<AppState>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(ItemCatalog::seeded(TEST_ITEMS)),
    };
    build_router_with(extra, state, &config)
}

/// Send a request with `method` and an empty body to `uri`.
pub async fn request(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as raw text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
