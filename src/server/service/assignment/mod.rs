//! Employee to café assignments and tenure.
//!
//! An employee has at most one assignment. Tenure is never stored, it is derived from the
//! assignment's start date each time an employee is read.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use crate::{
    model::employee::EmployeeDto,
    server::{
        data::{
            cafe::CafeRepository, employee::EmployeeRepository,
            employee_cafe::EmployeeCafeRepository,
        },
        error::{not_found::NotFoundError, Error},
        model::db::{AssignmentModel, EmployeeModel},
        util::time::{days_worked, today},
    },
};

/// Result of [`AssignmentService::attach`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// Employee had no assignment and now starts at the café today
    Created,
    /// Employee moved from another café, their start date was reset to today
    Moved,
    /// Employee was already at the café, their start date is unchanged
    Unchanged,
}

/// Service maintaining the single assignment per employee and reading employees with tenure.
///
/// Generic over the connection so it can run inside a transaction opened by the employee
/// and café services.
pub struct AssignmentService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentService<'a, C> {
    /// Creates a new instance of [`AssignmentService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns an employee to a café.
    ///
    /// Both records are checked before anything is written. The start date is only reset
    /// when the employee moves to a different café.
    ///
    /// # Arguments
    /// - `employee_id` - ID of an existing employee
    /// - `cafe_id` - ID of an existing café
    ///
    /// # Returns
    /// - `Ok(AttachOutcome)` - How the assignment changed
    /// - `Err(Error::NotFoundError)` - Employee or café does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn attach(&self, employee_id: &str, cafe_id: &str) -> Result<AttachOutcome, Error> {
        let assignment_repo = EmployeeCafeRepository::new(self.db);

        if EmployeeRepository::new(self.db)
            .get_by_id(employee_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Employee(employee_id.to_string()).into());
        }
        if CafeRepository::new(self.db).get_by_id(cafe_id).await?.is_none() {
            return Err(NotFoundError::Cafe(cafe_id.to_string()).into());
        }

        match assignment_repo.get_by_employee_id(employee_id).await? {
            None => {
                assignment_repo
                    .create(employee_id, cafe_id, today())
                    .await?;

                Ok(AttachOutcome::Created)
            }
            Some(assignment) if assignment.cafe_id == cafe_id => Ok(AttachOutcome::Unchanged),
            Some(assignment) => {
                assignment_repo
                    .update_cafe(assignment, cafe_id, today())
                    .await?;

                Ok(AttachOutcome::Moved)
            }
        }
    }

    /// Removes an employee's assignment, returning whether one existed.
    ///
    /// Detaching an unassigned employee is not an error.
    pub async fn detach(&self, employee_id: &str) -> Result<bool, Error> {
        let result = EmployeeCafeRepository::new(self.db)
            .delete_by_employee_id(employee_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists employees with their café name and tenure, longest tenure first.
    ///
    /// When `cafe_id` is provided only employees assigned to that café are returned; the
    /// café's existence is not checked here. Employees with equal tenure keep their creation
    /// order.
    pub async fn list_with_tenure(&self, cafe_id: Option<&str>) -> Result<Vec<EmployeeDto>, Error> {
        let assignments = EmployeeCafeRepository::new(self.db)
            .get_many(cafe_id)
            .await?;

        let employees = match cafe_id {
            Some(_) => {
                let employee_ids: Vec<String> = assignments
                    .iter()
                    .map(|assignment| assignment.employee_id.clone())
                    .collect();

                EmployeeRepository::new(self.db)
                    .get_many(Some(employee_ids.as_slice()))
                    .await?
            }
            None => EmployeeRepository::new(self.db).get_many(None).await?,
        };

        let cafe_names = self.cafe_names(&assignments).await?;
        let assignments: HashMap<String, AssignmentModel> = assignments
            .into_iter()
            .map(|assignment| (assignment.employee_id.clone(), assignment))
            .collect();

        let today = today();
        let mut employees: Vec<EmployeeDto> = employees
            .into_iter()
            .map(|employee| {
                let assignment = assignments.get(&employee.id);
                let cafe_name = assignment.and_then(|a| cafe_names.get(&a.cafe_id));

                to_employee_dto(employee, assignment, cafe_name.map(String::as_str), today)
            })
            .collect();

        employees.sort_by(|a, b| b.days_worked.cmp(&a.days_worked));

        Ok(employees)
    }

    /// Gets a single employee with their café name and tenure.
    ///
    /// # Returns
    /// - `Ok(EmployeeDto)` - Employee found
    /// - `Err(Error::NotFoundError)` - No employee with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_one_with_tenure(&self, employee_id: &str) -> Result<EmployeeDto, Error> {
        let Some(employee) = EmployeeRepository::new(self.db)
            .get_by_id(employee_id)
            .await?
        else {
            return Err(NotFoundError::Employee(employee_id.to_string()).into());
        };

        let assignment = EmployeeCafeRepository::new(self.db)
            .get_by_employee_id(employee_id)
            .await?;
        let cafe_names = self.cafe_names(assignment.as_slice()).await?;
        let cafe_name = assignment
            .as_ref()
            .and_then(|a| cafe_names.get(&a.cafe_id));

        Ok(to_employee_dto(
            employee,
            assignment.as_ref(),
            cafe_name.map(String::as_str),
            today(),
        ))
    }

    async fn cafe_names(
        &self,
        assignments: &[AssignmentModel],
    ) -> Result<HashMap<String, String>, Error> {
        let mut cafe_ids: Vec<String> = assignments
            .iter()
            .map(|assignment| assignment.cafe_id.clone())
            .collect();
        cafe_ids.sort();
        cafe_ids.dedup();

        let cafes = CafeRepository::new(self.db)
            .get_many_by_ids(&cafe_ids)
            .await?;

        Ok(cafes.into_iter().map(|cafe| (cafe.id, cafe.name)).collect())
    }
}

/// Combines an employee with their assignment, unassigned employees get an empty café
/// name and 0 days worked.
fn to_employee_dto(
    employee: EmployeeModel,
    assignment: Option<&AssignmentModel>,
    cafe_name: Option<&str>,
    today: NaiveDate,
) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        name: employee.name,
        email_address: employee.email_address,
        phone_number: employee.phone_number,
        gender: employee.gender,
        days_worked: assignment
            .map(|a| days_worked(a.start_date, today))
            .unwrap_or(0),
        cafe: cafe_name.unwrap_or_default().to_string(),
        cafe_id: assignment.map(|a| a.cafe_id.clone()),
    }
}
