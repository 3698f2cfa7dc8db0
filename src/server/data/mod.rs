//! Data access layer repositories.
//!
//! This module contains the database repositories for cafés, employees, and the
//! employee to café assignment table. Repositories are generic over [`sea_orm::ConnectionTrait`]
//! so the same methods run against a pooled connection or inside a transaction.

pub mod cafe;
pub mod employee;
pub mod employee_cafe;
