use super::*;

/// Expect 200 with the updated fields
#[tokio::test]
async fn updates_cafe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .build()
        .await?;

    let result = update_cafe(
        State(test.to_app_state()),
        Path(CAFE_ID.to_string()),
        form("BrewHouse", "Now with tea", "East"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let cafe: CafeDto = read_json(resp).await;
    assert_eq!(cafe.id, CAFE_ID);
    assert_eq!(cafe.name, "BrewHouse");
    assert_eq!(cafe.location, "East");

    Ok(())
}

/// Expect fields absent from the body to keep their values
#[tokio::test]
async fn keeps_absent_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .build()
        .await?;

    let cafe_form = CafeForm {
        payload: CafePayload {
            location: Some("West".to_string()),
            ..Default::default()
        },
        logo: None,
    };
    let result = update_cafe(
        State(test.to_app_state()),
        Path(CAFE_ID.to_string()),
        cafe_form,
    )
    .await;

    let cafe: CafeDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(cafe.name, "JavaBeans");
    assert_eq!(cafe.location, "West");

    Ok(())
}

/// Expect 404 when the café does not exist
#[tokio::test]
async fn unknown_cafe_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = update_cafe(
        State(test.to_app_state()),
        Path(CAFE_ID.to_string()),
        form("BrewHouse", "Now with tea", "East"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a name over ten characters
#[tokio::test]
async fn rejects_long_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .build()
        .await?;

    let result = update_cafe(
        State(test.to_app_state()),
        Path(CAFE_ID.to_string()),
        form("TheGrandRoastery", "Now with tea", "East"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(resp).await, "Name cannot exceed 10 characters");

    Ok(())
}
