use axum::body::Body;
use axum::http::{Method, Request};
use cafe_roster::model::api::HealthDto;

use super::*;
use crate::util::{read_json, send};

/// Expect 200 with status `ok`
#[tokio::test]
async fn reports_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = send(&test, request).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthDto = read_json(resp).await;
    assert_eq!(body.status, "ok");

    Ok(())
}
