use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("Cafe ID {0:?} not found")]
    Cafe(String),
    #[error("Employee ID {0:?} not found")]
    Employee(String),
}

impl NotFoundError {
    fn message(&self) -> &'static str {
        match self {
            Self::Cafe(_) => "Cafe not found",
            Self::Employee(_) => "Employee not found",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::NOT_FOUND, Json(ErrorDto::new(self.message()))).into_response()
    }
}
