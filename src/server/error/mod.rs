//! Error types for the café roster server.
//!
//! This module provides the error handling system used across the server with specialized
//! error types for the different failure classes (configuration, validation, missing records,
//! logo uploads). All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for their `Display` and `Error` implementations.

pub mod config;
pub mod not_found;
pub mod upload;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, not_found::NotFoundError, upload::UploadError,
        validation::ValidationError,
    },
};

/// Main error type for the café roster server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to the uniform JSON error envelope with the matching status code.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (payload violates a field rule, duplicate email, malformed body)
/// - Not found errors (referenced café or employee does not exist)
/// - Upload errors (logo has the wrong type or is too large)
/// - External library errors (database, filesystem)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client supplied data that fails a declared rule.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Referenced café or employee does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Logo upload was rejected.
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Filesystem error while storing or removing uploaded logos.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Unwraps the error returned by a database transaction closure.
///
/// Errors raised inside the closure are returned as-is, failures to begin or commit the
/// transaction become [`Error::DbErr`].
impl From<TransactionError<Error>> for Error {
    fn from(err: TransactionError<Error>) -> Self {
        match err {
            TransactionError::Connection(err) => Self::DbErr(err),
            TransactionError::Transaction(err) => err,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation, upload, and unique constraint failures
/// - 404 Not Found - Missing cafés or employees
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    ValidationError::Conflict(detail).into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. In debug builds the error message
/// is attached to the response as `error.detail`.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let mut body = ErrorDto::new("Internal server error");
        if cfg!(debug_assertions) {
            body = body.with_detail(self.0.to_string());
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
