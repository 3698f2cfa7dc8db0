//! Helpers for sending requests through the application router in integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use cafe_roster::server::{config::CorsOrigins, model::app::AppState, router::routes};
use cafe_roster_test_utils::TestContext;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Builds the API router backed by the test database and upload directory
pub fn app(test: &TestContext) -> Router {
    routes(test.upload_path(), &CorsOrigins::Any).with_state(test.to_app_state::<AppState>())
}

/// Sends a request through a fresh router and returns the response
pub async fn send(test: &TestContext, request: Request<Body>) -> Response {
    match app(test).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}

/// Request with an optional JSON body
pub fn json_request(method: Method, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    };

    request.unwrap()
}

/// Reads the response body as JSON
pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Reads the `error.message` field of an error envelope
pub async fn error_message(response: Response) -> String {
    let body: serde_json::Value = read_json(response).await;

    assert_eq!(body["success"], false);
    body["error"]["message"].as_str().unwrap_or_default().to_string()
}
