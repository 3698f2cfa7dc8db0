//! HTTP controller endpoints for the café roster API.
//!
//! This module contains the Axum handlers for cafés, employees, and the health probe.
//! Handlers extract the request, delegate to a service, and map the result to a JSON
//! response. Every handler is annotated with utoipa for the OpenAPI document.

pub mod cafe;
pub mod employee;
pub mod health;
pub mod util;
