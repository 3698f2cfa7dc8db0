//! Service layer for business logic and orchestration.
//!
//! Services validate requests, coordinate the café, employee and assignment repositories,
//! wrap multi-step writes in a single transaction, and convert records into API DTOs.
//! Handlers construct a service per request from the shared [`AppState`](crate::server::model::app::AppState).

pub mod assignment;
pub mod cafe;
pub mod employee;
pub mod upload;
