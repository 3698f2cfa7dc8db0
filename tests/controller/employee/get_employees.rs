use super::*;

/// Expect 200 with employees ordered by days worked
#[tokio::test]
async fn lists_by_days_worked() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .with_mock_employee("UIAAAAAA1")
        .with_mock_employee("UIAAAAAA2")
        .with_mock_employee("UIAAAAAA3")
        .with_assignment("UIAAAAAA1", CAFE_ID, days_ago(5))
        .with_assignment("UIAAAAAA2", CAFE_ID, days_ago(40))
        .build()
        .await?;

    let result = get_employees(State(test.to_app_state()), Query(EmployeeQuery::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let employees: Vec<EmployeeDto> = read_json(resp).await;
    let ids: Vec<&str> = employees.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["UIAAAAAA2", "UIAAAAAA1", "UIAAAAAA3"]);
    assert_eq!(employees[0].days_worked, 40);
    assert_eq!(employees[0].cafe, "JavaBeans");
    assert_eq!(employees[2].days_worked, 0);
    assert_eq!(employees[2].cafe, "");

    Ok(())
}

/// Expect only employees of the requested café
#[tokio::test]
async fn filters_by_cafe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .with_mock_cafe("cafe-other", "BrewHouse", "East")
        .with_mock_employee("UIAAAAAA1")
        .with_mock_employee("UIAAAAAA2")
        .with_assignment("UIAAAAAA1", CAFE_ID, days_ago(5))
        .with_assignment("UIAAAAAA2", "cafe-other", days_ago(5))
        .build()
        .await?;

    let query = EmployeeQuery {
        cafe: Some(CAFE_ID.to_string()),
    };
    let result = get_employees(State(test.to_app_state()), Query(query)).await;

    let employees: Vec<EmployeeDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, "UIAAAAAA1");

    Ok(())
}

/// Expect 404 when filtering by a café that does not exist
#[tokio::test]
async fn unknown_cafe_filter_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_employee("UIAAAAAA1")
        .build()
        .await?;

    let query = EmployeeQuery {
        cafe: Some(CAFE_ID.to_string()),
    };
    let result = get_employees(State(test.to_app_state()), Query(query)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(resp).await, "Cafe not found");

    Ok(())
}

/// Expect 404 for an unknown employee
#[tokio::test]
async fn get_unknown_employee_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = get_employee(State(test.to_app_state()), Path("UIZZZZZZZ".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(resp).await, "Employee not found");

    Ok(())
}
