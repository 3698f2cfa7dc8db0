use cafe_roster::{
    model::{api::SuccessDto, employee::EmployeeDto},
    server::controller::employee::{get_employee, get_employees, EmployeeQuery},
};

use super::*;

/// Expect 200 with the success envelope
#[tokio::test]
async fn deletes_cafe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .build()
        .await?;

    let result = delete_cafe(State(test.to_app_state()), Path(CAFE_ID.to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: SuccessDto = read_json(resp).await;
    assert!(body.success);
    assert_eq!(body.message, "Cafe deleted successfully");

    let result = get_cafe(State(test.to_app_state()), Path(CAFE_ID.to_string())).await;
    assert!(result.is_err());

    Ok(())
}

/// Expect employees of the deleted café to remain, unassigned
#[tokio::test]
async fn unassigns_employees() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .with_mock_employee("UIAAAAAA1")
        .with_assignment("UIAAAAAA1", CAFE_ID, days_ago(30))
        .build()
        .await?;

    let result = delete_cafe(State(test.to_app_state()), Path(CAFE_ID.to_string())).await;
    assert!(result.is_ok());

    let result = get_employee(State(test.to_app_state()), Path("UIAAAAAA1".to_string())).await;
    let employee: EmployeeDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(employee.cafe, "");
    assert_eq!(employee.cafe_id, None);
    assert_eq!(employee.days_worked, 0);

    let result = get_employees(State(test.to_app_state()), Query(EmployeeQuery::default())).await;
    let employees: Vec<EmployeeDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(employees.len(), 1);

    Ok(())
}

/// Expect 404 when the café does not exist
#[tokio::test]
async fn unknown_cafe_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = delete_cafe(State(test.to_app_state()), Path(CAFE_ID.to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(resp).await, "Cafe not found");

    Ok(())
}
