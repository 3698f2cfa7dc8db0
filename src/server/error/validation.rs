use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A field failed one of its declared rules.
    #[error("{message}")]
    Field {
        field: &'static str,
        message: &'static str,
    },
    #[error("Email address is already in use")]
    EmailInUse,
    /// Request body could not be parsed into the expected payload.
    #[error("{0}")]
    MalformedBody(String),
    /// Write rejected by a uniqueness constraint in the database.
    #[error("Request conflicts with an existing record: {0}")]
    Conflict(String),
}

impl ValidationError {
    pub fn field(field: &'static str, message: &'static str) -> Self {
        Self::Field { field, message }
    }

    fn message(&self) -> String {
        match self {
            Self::Conflict(_) => "Request conflicts with an existing record".to_string(),
            err => err.to_string(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        match &self {
            Self::Field { field, message } => {
                tracing::debug!(field = %field, "Validation failed: {}", message);
            }
            err => tracing::debug!("Validation failed: {}", err),
        }

        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.message()))).into_response()
    }
}
