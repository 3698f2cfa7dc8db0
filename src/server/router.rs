//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{config::CorsOrigins, controller, model::app::AppState};

/// Largest accepted request body, leaving room for a 2MB logo plus the other form fields
pub const MAX_BODY_BYTES: usize = 3 * 1024 * 1024;

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /health` - Liveness probe
/// - `GET /cafes` - List cafés, optionally filtered by `location`
/// - `GET /cafes/{id}` - Get a café
/// - `POST /cafe` - Create a café (JSON or multipart with a logo file)
/// - `PUT /cafe/{id}` - Update a café
/// - `DELETE /cafe/{id}` - Delete a café and unassign its employees
/// - `GET /employees` - List employees, optionally filtered by `cafe`
/// - `GET /employees/{id}` - Get an employee
/// - `POST /employee` - Create an employee
/// - `PUT /employee/{id}` - Update an employee
/// - `DELETE /employee/{id}` - Delete an employee
/// - `GET /uploads/*` - Uploaded logos, served from `upload_dir`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Arguments
/// - `upload_dir` - Directory logos are written to, served under `/uploads`
/// - `cors_origins` - Origins allowed to call the API from a browser
///
/// # Example
/// ```ignore
/// let app_state = AppState::from((db, config.upload_dir.clone()));
/// let router = routes(&config.upload_dir, &config.cors_origins).with_state(app_state);
/// ```
pub fn routes(upload_dir: &Path, cors_origins: &CorsOrigins) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Cafe Roster", description = "Café and employee roster API"), tags(
        (name = controller::cafe::CAFE_TAG, description = "Café API routes"),
        (name = controller::employee::EMPLOYEE_TAG, description = "Employee API routes"),
        (name = controller::health::HEALTH_TAG, description = "Health probe"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::cafe::get_cafes))
        .routes(routes!(controller::cafe::get_cafe))
        .routes(routes!(controller::cafe::create_cafe))
        .routes(routes!(
            controller::cafe::update_cafe,
            controller::cafe::delete_cafe
        ))
        .routes(routes!(controller::employee::get_employees))
        .routes(routes!(controller::employee::get_employee))
        .routes(routes!(controller::employee::create_employee))
        .routes(routes!(
            controller::employee::update_employee,
            controller::employee::delete_employee
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(cors_origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match cors_origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allow_origin)
}
