//! Employee and assignment fixture utilities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{error::TestError, fixtures::factory};

/// Fixture helpers for inserting employees and assignments, obtained through
/// `TestContext::employee`.
pub struct EmployeeFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an employee with the provided ID and standard test values.
    ///
    /// # Returns
    /// - `Ok(entity::employee::Model)` - The inserted employee
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the ID is already used
    pub async fn insert_mock_employee(
        &self,
        employee_id: &str,
    ) -> Result<entity::employee::Model, TestError> {
        let employee = factory::mock_employee_model(employee_id)
            .into_active_model()
            .reset_all();

        Ok(employee.insert(self.db).await?)
    }

    /// Assign an employee to a café starting on `start_date`.
    ///
    /// # Returns
    /// - `Ok(entity::employee_cafe::Model)` - The inserted assignment
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the employee is already assigned or the
    ///   café does not exist
    pub async fn insert_assignment(
        &self,
        employee_id: &str,
        cafe_id: &str,
        start_date: NaiveDate,
    ) -> Result<entity::employee_cafe::Model, TestError> {
        let now = Utc::now().naive_utc();

        let assignment = entity::employee_cafe::ActiveModel {
            employee_id: ActiveValue::Set(employee_id.to_string()),
            cafe_id: ActiveValue::Set(cafe_id.to_string()),
            start_date: ActiveValue::Set(start_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(assignment.insert(self.db).await?)
    }
}
