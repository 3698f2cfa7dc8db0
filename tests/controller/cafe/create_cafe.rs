use axum::body::Bytes;

use super::*;

/// Expect 201 with a UUID id and zero employees
#[tokio::test]
async fn creates_cafe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = create_cafe(
        State(test.to_app_state()),
        form("JavaBeans", "Great coffee", "Central"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let cafe: CafeDto = read_json(resp).await;
    assert!(uuid::Uuid::parse_str(&cafe.id).is_ok());
    assert_eq!(cafe.name, "JavaBeans");
    assert_eq!(cafe.employees, 0);
    assert_eq!(cafe.logo, None);

    Ok(())
}

/// Expect 400 with the length message for a five character name
#[tokio::test]
async fn rejects_short_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = create_cafe(
        State(test.to_app_state()),
        form("ABCDE", "Great coffee", "Central"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(resp).await,
        "Name must be at least 6 characters long"
    );

    Ok(())
}

/// Expect 400 when the description is missing
#[tokio::test]
async fn rejects_missing_description() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let mut cafe_form = form("JavaBeans", "", "Central");
    cafe_form.payload.description = None;

    let result = create_cafe(State(test.to_app_state()), cafe_form).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(resp).await, "Description is required");

    Ok(())
}

/// Expect the uploaded logo to be stored and its public path returned
#[tokio::test]
async fn stores_uploaded_logo() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let mut cafe_form = form("JavaBeans", "Great coffee", "Central");
    cafe_form.logo = Some(LogoUpload {
        file_name: "logo.png".to_string(),
        content_type: Some("image/png".to_string()),
        data: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
    });

    let result = create_cafe(State(test.to_app_state()), cafe_form).await;

    let cafe: CafeDto = read_json(result.unwrap().into_response()).await;
    let logo = cafe.logo.unwrap();
    assert!(logo.starts_with("uploads/logos/"));
    assert!(logo.ends_with("-logo.png"));

    let file_name = logo.trim_start_matches("uploads/");
    assert!(test.upload_path().join(file_name).exists());

    Ok(())
}

/// Expect 400 for a logo that is not an image
#[tokio::test]
async fn rejects_text_logo() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let mut cafe_form = form("JavaBeans", "Great coffee", "Central");
    cafe_form.logo = Some(LogoUpload {
        file_name: "notes.txt".to_string(),
        content_type: Some("text/plain".to_string()),
        data: Bytes::from_static(b"hello"),
    });

    let result = create_cafe(State(test.to_app_state()), cafe_form).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(resp).await, "Only image files are allowed!");

    Ok(())
}
