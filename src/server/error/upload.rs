use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Only image files are allowed!")]
    UnsupportedFileType,
    #[error("Logo file cannot exceed 2MB")]
    FileTooLarge,
    #[error("Failed to read multipart form data: {0}")]
    Multipart(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected upload: {}", self);

        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
