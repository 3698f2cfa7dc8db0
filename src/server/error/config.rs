use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration read from the environment could not be used
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("{var} must be one of true/false, yes/no or 1/0, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
    #[error("{var} contains {origin:?}, which is not a valid origin: {reason}")]
    InvalidOrigin {
        var: &'static str,
        origin: String,
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
