use super::*;

/// Expect moving to another café to reset days worked
#[tokio::test]
async fn reassignment_resets_days_worked() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .with_mock_cafe("cafe-other", "BrewHouse", "East")
        .with_mock_employee("UIAAAAAA1")
        .with_assignment("UIAAAAAA1", "cafe-other", days_ago(45))
        .build()
        .await?;

    let result = update_employee(
        State(test.to_app_state()),
        Path("UIAAAAAA1".to_string()),
        body(payload("JaneDoeX", "jane@example.com", Some(CAFE_ID))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let employee: EmployeeDto = read_json(resp).await;
    assert_eq!(employee.name, "JaneDoeX");
    assert_eq!(employee.cafe, "JavaBeans");
    assert_eq!(employee.days_worked, 0);

    Ok(())
}

/// Expect re-sending the current café to keep the start date
#[tokio::test]
async fn same_cafe_keeps_days_worked() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .with_mock_employee("UIAAAAAA1")
        .with_assignment("UIAAAAAA1", CAFE_ID, days_ago(45))
        .build()
        .await?;

    let result = update_employee(
        State(test.to_app_state()),
        Path("UIAAAAAA1".to_string()),
        body(payload("JaneDoeX", "jane@example.com", Some(CAFE_ID))),
    )
    .await;

    let employee: EmployeeDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(employee.days_worked, 45);

    Ok(())
}

/// Expect an employee to keep their own email address
#[tokio::test]
async fn keeps_own_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_employee("UIAAAAAA1")
        .build()
        .await?;

    let result = update_employee(
        State(test.to_app_state()),
        Path("UIAAAAAA1".to_string()),
        body(payload("JaneDoeX", &factory::mock_email("UIAAAAAA1"), None)),
    )
    .await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect 404 for an unknown employee
#[tokio::test]
async fn unknown_employee_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = update_employee(
        State(test.to_app_state()),
        Path("UIZZZZZZZ".to_string()),
        body(payload("JaneDoeX", "jane@example.com", None)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(resp).await, "Employee not found");

    Ok(())
}
