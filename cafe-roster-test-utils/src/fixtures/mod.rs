//! Test fixture modules for database record creation.
//!
//! - `cafe` - Café records
//! - `employee` - Employee records and their café assignments
//! - `factory` - Pure helpers for dates and in-memory models

pub mod cafe;
pub mod employee;
pub mod factory;
