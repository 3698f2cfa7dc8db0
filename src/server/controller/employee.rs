use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        employee::{EmployeeDto, EmployeePayload},
    },
    server::{
        controller::util::json_body, error::Error, model::app::AppState,
        service::employee::EmployeeService, validation::non_empty,
    },
};

pub static EMPLOYEE_TAG: &str = "employee";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EmployeeQuery {
    /// Only return employees assigned to this café, empty means all
    pub cafe: Option<String>,
}

/// List employees, longest tenure first
#[utoipa::path(
    get,
    path = "/employees",
    tag = EMPLOYEE_TAG,
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Employees sorted by descending days worked", body = Vec<EmployeeDto>),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db);

    let cafe_id = non_empty(query.cafe);
    let employees = employee_service.list(cafe_id.as_deref()).await?;

    Ok((StatusCode::OK, Json(employees)))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee with their café and days worked", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db);

    let employee = employee_service.get(&id).await?;

    Ok((StatusCode::OK, Json(employee)))
}

/// Create an employee, optionally assigning them to a café
#[utoipa::path(
    post,
    path = "/employee",
    tag = EMPLOYEE_TAG,
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Created employee", body = EmployeeDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db);

    let payload = json_body(body)?;
    let employee = employee_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update the provided fields of an employee, moving them when `cafeId` is set
#[utoipa::path(
    put,
    path = "/employee/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = String, Path, description = "Employee ID")),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Employee or cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db);

    let payload = json_body(body)?;
    let employee = employee_service.update(&id, payload).await?;

    Ok((StatusCode::OK, Json(employee)))
}

/// Delete an employee and their assignment
#[utoipa::path(
    delete,
    path = "/employee/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = SuccessDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db);

    employee_service.delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new("Employee deleted successfully")),
    ))
}
