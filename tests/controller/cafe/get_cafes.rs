use super::*;

/// Expect 200 with cafés ordered by employee count
#[tokio::test]
async fn lists_cafes_by_employee_count() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe("cafe-quiet", "QuietCup", "Central")
        .with_mock_cafe("cafe-busy", "BusyBrew", "Central")
        .with_mock_employee("UIAAAAAA1")
        .with_mock_employee("UIAAAAAA2")
        .with_assignment("UIAAAAAA1", "cafe-busy", days_ago(3))
        .with_assignment("UIAAAAAA2", "cafe-busy", days_ago(1))
        .build()
        .await?;

    let result = get_cafes(State(test.to_app_state()), Query(CafeQuery::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let cafes: Vec<CafeDto> = read_json(resp).await;
    assert_eq!(cafes.len(), 2);
    assert_eq!(cafes[0].name, "BusyBrew");
    assert_eq!(cafes[0].employees, 2);
    assert_eq!(cafes[1].employees, 0);

    Ok(())
}

/// Expect only cafés at the requested location
#[tokio::test]
async fn filters_by_location() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe("cafe-1", "JavaBeans", "Central")
        .with_mock_cafe("cafe-2", "BrewHouse", "East")
        .build()
        .await?;

    let query = CafeQuery {
        location: Some("East".to_string()),
    };
    let result = get_cafes(State(test.to_app_state()), Query(query)).await;

    let cafes: Vec<CafeDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0].name, "BrewHouse");

    Ok(())
}

/// Expect an empty location to list every café
#[tokio::test]
async fn empty_location_lists_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe("cafe-1", "JavaBeans", "Central")
        .with_mock_cafe("cafe-2", "BrewHouse", "East")
        .build()
        .await?;

    let query = CafeQuery {
        location: Some(String::new()),
    };
    let result = get_cafes(State(test.to_app_state()), Query(query)).await;

    let cafes: Vec<CafeDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(cafes.len(), 2);

    Ok(())
}

/// Expect 200 with an empty array for an unknown location
#[tokio::test]
async fn unknown_location_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe("cafe-1", "JavaBeans", "Central")
        .build()
        .await?;

    let query = CafeQuery {
        location: Some("Nowhere".to_string()),
    };
    let result = get_cafes(State(test.to_app_state()), Query(query)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let cafes: Vec<CafeDto> = read_json(resp).await;
    assert!(cafes.is_empty());

    Ok(())
}

/// Expect 200 with the café and its employee count
#[tokio::test]
async fn gets_single_cafe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .with_mock_employee("UIAAAAAA1")
        .with_assignment("UIAAAAAA1", CAFE_ID, days_ago(0))
        .build()
        .await?;

    let result = get_cafe(State(test.to_app_state()), Path(CAFE_ID.to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let cafe: CafeDto = read_json(resp).await;
    assert_eq!(cafe.id, CAFE_ID);
    assert_eq!(cafe.employees, 1);

    Ok(())
}

/// Expect 404 for an unknown café
#[tokio::test]
async fn get_unknown_cafe_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = get_cafe(State(test.to_app_state()), Path(CAFE_ID.to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(resp).await, "Cafe not found");

    Ok(())
}
