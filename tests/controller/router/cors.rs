use super::*;

/// Expect preflight requests from any origin to be allowed by default
#[tokio::test]
async fn allows_any_origin_preflight() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/cafes")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();
    let resp = send(&test, request).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    Ok(())
}
