//! Request extraction helpers shared by controllers.

pub mod cafe_form;

use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::validation::ValidationError;

/// Unwraps a JSON body, turning a parse failure into a 400 with the parser's message.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))
}
