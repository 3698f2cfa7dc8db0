use cafe_roster::{model::cafe::CafeDto, server::controller::cafe::get_cafe};

use super::*;

/// Expect 200 and the café's employee count to drop
#[tokio::test]
async fn deletes_employee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .with_mock_employee("UIAAAAAA1")
        .with_assignment("UIAAAAAA1", CAFE_ID, days_ago(10))
        .build()
        .await?;

    let result = delete_employee(State(test.to_app_state()), Path("UIAAAAAA1".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_employee(State(test.to_app_state()), Path("UIAAAAAA1".to_string())).await;
    assert!(result.is_err());

    let result = get_cafe(State(test.to_app_state()), Path(CAFE_ID.to_string())).await;
    let cafe: CafeDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(cafe.employees, 0);

    Ok(())
}

/// Expect 404 for an unknown employee
#[tokio::test]
async fn unknown_employee_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = delete_employee(State(test.to_app_state()), Path("UIZZZZZZZ".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
