use super::mocks::MockImageGenerator;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use medscope::{
    photos::PhotoResolver,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};

/// Pause used by resolvers in tests; the tokio clock is paused where it matters
pub const TEST_PAUSE: Duration = Duration::from_secs(1);

/// Create a resolver backed by the given mock
pub fn resolver_with(mock: &MockImageGenerator) -> PhotoResolver {
    PhotoResolver::new(Some(Arc::new(mock.clone())), TEST_PAUSE)
}

/// Create a resolver with no provider credential
pub fn unconfigured_resolver() -> PhotoResolver {
    PhotoResolver::new(None, TEST_PAUSE)
}

/// Create the full application router around a resolver
pub fn create_test_app(resolver: PhotoResolver) -> Router {
    let state = AppState {
        resolver: Arc::new(resolver),
    };
    server::router(state, None)
}

pub fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(server::PHOTOS_ROUTE)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn read_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
