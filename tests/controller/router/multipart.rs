use super::*;

static BOUNDARY: &str = "roster-test-boundary";

/// Builds a multipart body from text fields and an optional `logo` file part
fn multipart_body(fields: &[(&str, &str)], logo: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, content_type, data)) = logo {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"logo\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

static CAFE_FIELDS: &[(&str, &str)] = &[
    ("name", "JavaBeans"),
    ("description", "Great coffee"),
    ("location", "Central"),
];

/// Expect the logo to be stored and then served under `/uploads`
#[tokio::test]
async fn uploads_and_serves_logo() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let png = b"\x89PNG\r\n\x1a\nlogo-bytes";

    let body = multipart_body(CAFE_FIELDS, Some(("Logo.PNG", "image/png", &png[..])));
    let resp = send(&test, multipart_request("/cafe", body)).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let cafe: CafeDto = read_json(resp).await;
    let logo = cafe.logo.unwrap();
    assert!(logo.starts_with("uploads/logos/"));

    let resp = send(&test, json_request(Method::GET, &format!("/{}", logo), None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], &png[..]);

    Ok(())
}

/// Expect a form without a file to create a café without a logo
#[tokio::test]
async fn creates_cafe_without_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let body = multipart_body(CAFE_FIELDS, None);
    let resp = send(&test, multipart_request("/cafe", body)).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let cafe: CafeDto = read_json(resp).await;
    assert_eq!(cafe.logo, None);

    Ok(())
}

/// Expect 400 for a file that is not an image
#[tokio::test]
async fn rejects_non_image_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let body = multipart_body(CAFE_FIELDS, Some(("notes.txt", "text/plain", &b"hello"[..])));
    let resp = send(&test, multipart_request("/cafe", body)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(resp).await, "Only image files are allowed!");

    Ok(())
}

/// Expect 400 for an image over 2MB
#[tokio::test]
async fn rejects_oversized_image() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let data = vec![0u8; 2 * 1024 * 1024 + 1];

    let body = multipart_body(CAFE_FIELDS, Some(("big.jpg", "image/jpeg", data.as_slice())));
    let resp = send(&test, multipart_request("/cafe", body)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(resp).await, "Logo file cannot exceed 2MB");

    Ok(())
}

/// Expect a failed validation to leave no file behind
#[tokio::test]
async fn invalid_cafe_stores_no_logo() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let fields = [
        ("name", "ABCDE"),
        ("description", "Great coffee"),
        ("location", "Central"),
    ];

    let body = multipart_body(&fields, Some(("logo.gif", "image/gif", &b"GIF89a"[..])));
    let resp = send(&test, multipart_request("/cafe", body)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let logos = test.upload_path().join("logos");
    let stored = std::fs::read_dir(&logos)
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(stored, 0);

    Ok(())
}
