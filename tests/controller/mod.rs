//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an `AppState` built from the test context, while the
//! `router` tests send requests through the full router to cover body parsing, uploads,
//! CORS and the end to end roster flows.

mod cafe;
mod health;
mod router;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use cafe_roster_test_utils::prelude::*;

/// UUID of the café inserted by most controller tests
static CAFE_ID: &str = "3f1c2a3e-7b4d-4f52-9a9b-2f5d6c7e8a90";
