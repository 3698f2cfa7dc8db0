use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        cafe::{CafeDto, CafePayload},
    },
    server::{
        controller::util::cafe_form::{CafeForm, CafeUploadForm},
        error::Error,
        model::app::AppState,
        service::cafe::CafeService,
        validation::non_empty,
    },
};

pub static CAFE_TAG: &str = "cafe";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CafeQuery {
    /// Only return cafés at exactly this location, empty means all
    pub location: Option<String>,
}

/// List cafés, most employees first
#[utoipa::path(
    get,
    path = "/cafes",
    tag = CAFE_TAG,
    params(CafeQuery),
    responses(
        (status = 200, description = "Cafés sorted by descending employee count", body = Vec<CafeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cafes(
    State(state): State<AppState>,
    Query(query): Query<CafeQuery>,
) -> Result<impl IntoResponse, Error> {
    let cafe_service = CafeService::new(&state.db, &state.logo_store);

    let location = non_empty(query.location);
    let cafes = cafe_service.list(location.as_deref()).await?;

    Ok((StatusCode::OK, Json(cafes)))
}

/// Get a café by ID
#[utoipa::path(
    get,
    path = "/cafes/{id}",
    tag = CAFE_TAG,
    params(("id" = String, Path, description = "Café ID")),
    responses(
        (status = 200, description = "Café with its employee count", body = CafeDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cafe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let cafe_service = CafeService::new(&state.db, &state.logo_store);

    let cafe = cafe_service.get(&id).await?;

    Ok((StatusCode::OK, Json(cafe)))
}

/// Create a café, optionally uploading its logo
#[utoipa::path(
    post,
    path = "/cafe",
    tag = CAFE_TAG,
    request_body(content(
        (CafePayload = "application/json"),
        (CafeUploadForm = "multipart/form-data")
    )),
    responses(
        (status = 201, description = "Created café", body = CafeDto),
        (status = 400, description = "Validation or upload failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cafe(
    State(state): State<AppState>,
    form: CafeForm,
) -> Result<impl IntoResponse, Error> {
    let cafe_service = CafeService::new(&state.db, &state.logo_store);

    let cafe = cafe_service.create(form.payload, form.logo).await?;

    Ok((StatusCode::CREATED, Json(cafe)))
}

/// Update the provided fields of a café
#[utoipa::path(
    put,
    path = "/cafe/{id}",
    tag = CAFE_TAG,
    params(("id" = String, Path, description = "Café ID")),
    request_body(content(
        (CafePayload = "application/json"),
        (CafeUploadForm = "multipart/form-data")
    )),
    responses(
        (status = 200, description = "Updated café", body = CafeDto),
        (status = 400, description = "Validation or upload failure", body = ErrorDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cafe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: CafeForm,
) -> Result<impl IntoResponse, Error> {
    let cafe_service = CafeService::new(&state.db, &state.logo_store);

    let cafe = cafe_service.update(&id, form.payload, form.logo).await?;

    Ok((StatusCode::OK, Json(cafe)))
}

/// Delete a café, its employees become unassigned
#[utoipa::path(
    delete,
    path = "/cafe/{id}",
    tag = CAFE_TAG,
    params(("id" = String, Path, description = "Café ID")),
    responses(
        (status = 200, description = "Café deleted", body = SuccessDto),
        (status = 404, description = "Cafe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cafe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let cafe_service = CafeService::new(&state.db, &state.logo_store);

    cafe_service.delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new("Cafe deleted successfully")),
    ))
}
