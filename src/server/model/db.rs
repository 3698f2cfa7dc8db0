//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM database entity models used throughout the
//! application, giving a single point of reference for model types without importing from
//! the generated `entity` crate directly.

/// Type alias for café database model.
///
/// # Fields (from `entity::cafe::Model`)
/// - `id` - Primary key, UUID v4 string
/// - `name` - Display name, 6 to 10 characters
/// - `description` - Up to 256 characters
/// - `logo` - Public path of the uploaded logo, if any
/// - `location` - Free text location
/// - `created_at` / `updated_at` - Record timestamps
pub type CafeModel = entity::cafe::Model;

/// Type alias for employee database model.
///
/// # Fields (from `entity::employee::Model`)
/// - `id` - Primary key, `UI` followed by 7 uppercase alphanumerics
/// - `name` - Display name, 6 to 10 characters
/// - `email_address` - Unique email address
/// - `phone_number` - 8 digits starting with 8 or 9
/// - `gender` - `Male` or `Female`
/// - `created_at` / `updated_at` - Record timestamps
pub type EmployeeModel = entity::employee::Model;

/// Type alias for the employee to café assignment model.
///
/// Each employee has at most one assignment, enforced by a unique constraint on
/// `employee_id`.
///
/// # Fields (from `entity::employee_cafe::Model`)
/// - `id` - Primary key
/// - `employee_id` - Foreign key to the assigned employee (unique)
/// - `cafe_id` - Foreign key to the café
/// - `start_date` - UTC calendar date the employee started at the café
/// - `created_at` / `updated_at` - Record timestamps
pub type AssignmentModel = entity::employee_cafe::Model;
