use super::*;

/// Expect 201 with a generated `UI` id and the café assignment starting today
#[tokio::test]
async fn creates_assigned_employee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .build()
        .await?;

    let result = create_employee(
        State(test.to_app_state()),
        body(payload("JohnDoeX", "john@example.com", Some(CAFE_ID))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let employee: EmployeeDto = read_json(resp).await;
    assert!(employee.id.starts_with("UI"));
    assert_eq!(employee.id.len(), 9);
    assert_eq!(employee.cafe, "JavaBeans");
    assert_eq!(employee.cafe_id.as_deref(), Some(CAFE_ID));
    assert_eq!(employee.days_worked, 0);

    Ok(())
}

/// Expect an employee without a café to be created unassigned
#[tokio::test]
async fn creates_unassigned_employee() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = create_employee(
        State(test.to_app_state()),
        body(payload("JohnDoeX", "john@example.com", Some(""))),
    )
    .await;

    let employee: EmployeeDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(employee.cafe, "");
    assert_eq!(employee.cafe_id, None);

    Ok(())
}

/// Expect 400 for a phone number not starting with 8 or 9
#[tokio::test]
async fn rejects_invalid_phone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let mut employee = payload("JohnDoeX", "john@example.com", None);
    employee.phone_number = Some("12345678".to_string());

    let result = create_employee(State(test.to_app_state()), body(employee)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(resp).await,
        "Phone number must start with 8 or 9 and have 8 digits"
    );

    Ok(())
}

/// Expect 400 when the email address belongs to another employee
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_employee("UIAAAAAA1")
        .build()
        .await?;

    let result = create_employee(
        State(test.to_app_state()),
        body(payload("JohnDoeX", &factory::mock_email("UIAAAAAA1"), None)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(resp).await, "Email address is already in use");

    Ok(())
}

/// Expect 404 when assigning to a café that does not exist
#[tokio::test]
async fn unknown_cafe_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = create_employee(
        State(test.to_app_state()),
        body(payload("JohnDoeX", "john@example.com", Some(CAFE_ID))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
