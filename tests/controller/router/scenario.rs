use super::*;

/// Expect the roster flow from café creation through deletion to hold together
#[tokio::test]
async fn manages_roster_end_to_end() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let resp = send(
        &test,
        json_request(
            Method::POST,
            "/cafe",
            Some(json!({"name": "ABCDE", "description": "Coffee", "location": "Central"})),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(
        &test,
        json_request(
            Method::POST,
            "/cafe",
            Some(json!({"name": "JavaBeans", "description": "Coffee", "location": "Central"})),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let cafe: CafeDto = read_json(resp).await;

    let resp = send(
        &test,
        json_request(
            Method::POST,
            "/employee",
            Some(json!({
                "name": "JohnDoeX",
                "email_address": "john@example.com",
                "phone_number": "12345678",
                "gender": "Male",
                "cafeId": cafe.id,
            })),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(
        &test,
        json_request(
            Method::POST,
            "/employee",
            Some(json!({
                "name": "JohnDoeX",
                "email_address": "john@example.com",
                "phone_number": "91234567",
                "gender": "Male",
                "cafeId": cafe.id,
            })),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let employee: EmployeeDto = read_json(resp).await;
    assert_eq!(employee.cafe, "JavaBeans");

    let uri = format!("/cafes?location={}", "Central");
    let resp = send(&test, json_request(Method::GET, &uri, None)).await;
    let cafes: Vec<CafeDto> = read_json(resp).await;
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0].employees, 1);

    let uri = format!("/cafe/{}", cafe.id);
    let resp = send(&test, json_request(Method::DELETE, &uri, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let uri = format!("/employees/{}", employee.id);
    let resp = send(&test, json_request(Method::GET, &uri, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let employee: EmployeeDto = read_json(resp).await;
    assert_eq!(employee.cafe, "");
    assert_eq!(employee.days_worked, 0);

    let uri = format!("/employees?cafe={}", cafe.id);
    let resp = send(&test, json_request(Method::GET, &uri, None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a body that is not JSON to produce the error envelope with 400
#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/employee")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let resp = send(&test, request).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!error_message(resp).await.is_empty());

    Ok(())
}

/// Expect a café update through PUT to change only the sent fields
#[tokio::test]
async fn updates_cafe_with_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_cafe(CAFE_ID, "JavaBeans", "Central")
        .build()
        .await?;

    let uri = format!("/cafe/{}", CAFE_ID);
    let resp = send(
        &test,
        json_request(Method::PUT, &uri, Some(json!({"location": "East"}))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cafe: CafeDto = read_json(resp).await;
    assert_eq!(cafe.name, "JavaBeans");
    assert_eq!(cafe.location, "East");

    Ok(())
}

/// Expect the OpenAPI document to list the roster routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(
        &test,
        json_request(Method::GET, "/api/docs/openapi.json", None),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = read_json(resp).await;
    assert!(doc["paths"]["/cafes"].is_object());
    assert!(doc["paths"]["/employee/{id}"].is_object());

    Ok(())
}
