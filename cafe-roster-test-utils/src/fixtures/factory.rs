//! Factory functions for generating mock values.
//!
//! Provides pure functions that don't require database interaction, suitable for
//! building fixtures and expected values in assertions.

use chrono::{Duration, NaiveDate, Utc};

/// UTC calendar date `days` days before today, `days_ago(0)` is today.
pub fn days_ago(days: i64) -> NaiveDate {
    Utc::now().date_naive() - Duration::days(days)
}

/// Email address used for the mock employee with the provided ID.
pub fn mock_email(employee_id: &str) -> String {
    format!("{}@example.com", employee_id.to_lowercase())
}

/// Create a mock café database model for testing.
///
/// Returns an in-memory model instance without database interaction.
pub fn mock_cafe_model(cafe_id: &str, name: &str, location: &str) -> entity::cafe::Model {
    let now = Utc::now().naive_utc();
    entity::cafe::Model {
        id: cafe_id.to_string(),
        name: name.to_string(),
        description: format!("{} serves coffee", name),
        logo: None,
        location: location.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock employee database model for testing.
///
/// Returns an in-memory model instance without database interaction.
pub fn mock_employee_model(employee_id: &str) -> entity::employee::Model {
    let now = Utc::now().naive_utc();
    entity::employee::Model {
        id: employee_id.to_string(),
        name: "Test Staff".to_string(),
        email_address: mock_email(employee_id),
        phone_number: "91234567".to_string(),
        gender: "Male".to_string(),
        created_at: now,
        updated_at: now,
    }
}
