//! Employee CRUD.
//!
//! Writes that touch both the employee and assignment tables run in a single transaction,
//! reads are delegated to [`AssignmentService`] so every response carries the current tenure.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::employee::{EmployeeDto, EmployeePayload},
    server::{
        data::{cafe::CafeRepository, employee::EmployeeRepository},
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::assignment::AssignmentService,
        util::{id::generate_employee_id, transaction::in_transaction},
        validation::employee::{
            validate_employee_changes, validate_new_employee, ValidatedEmployeeChanges,
            ValidatedNewEmployee,
        },
    },
};

/// Attempts at finding an unused random employee ID before giving up
const EMPLOYEE_ID_ATTEMPTS: usize = 10;

/// Service for listing, creating, updating, and deleting employees.
pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new instance of [`EmployeeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists employees with tenure, longest tenure first.
    ///
    /// # Arguments
    /// - `cafe_id` - Only return employees assigned to this café
    ///
    /// # Returns
    /// - `Ok(Vec<EmployeeDto>)` - Matching employees
    /// - `Err(Error::NotFoundError)` - The filter café does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self, cafe_id: Option<&str>) -> Result<Vec<EmployeeDto>, Error> {
        if let Some(cafe_id) = cafe_id {
            self.ensure_cafe_exists(cafe_id).await?;
        }

        AssignmentService::new(self.db)
            .list_with_tenure(cafe_id)
            .await
    }

    /// Gets an employee with tenure, or [`NotFoundError::Employee`].
    pub async fn get(&self, employee_id: &str) -> Result<EmployeeDto, Error> {
        AssignmentService::new(self.db)
            .get_one_with_tenure(employee_id)
            .await
    }

    /// Validates and creates an employee, assigning them to a café when `cafeId` is provided.
    ///
    /// The café and email address are checked before anything is written. The employee row
    /// and the assignment are inserted in the same transaction.
    ///
    /// # Returns
    /// - `Ok(EmployeeDto)` - Created employee, with 0 days worked
    /// - `Err(Error::ValidationError)` - Payload fails a field rule or the email is in use
    /// - `Err(Error::NotFoundError)` - `cafeId` does not reference a café
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn create(&self, payload: EmployeePayload) -> Result<EmployeeDto, Error> {
        let ValidatedNewEmployee { employee, cafe_id } = validate_new_employee(payload)?;

        if let Some(cafe_id) = &cafe_id {
            self.ensure_cafe_exists(cafe_id).await?;
        }
        if EmployeeRepository::new(self.db)
            .get_by_email(&employee.email_address)
            .await?
            .is_some()
        {
            return Err(ValidationError::EmailInUse.into());
        }

        let employee_id = self.unused_employee_id().await?;

        let created_id = in_transaction(self.db, move |txn| {
            Box::pin(async move {
                EmployeeRepository::new(txn)
                    .create(&employee_id, employee)
                    .await?;

                if let Some(cafe_id) = cafe_id {
                    AssignmentService::new(txn)
                        .attach(&employee_id, &cafe_id)
                        .await?;
                }

                Ok::<_, Error>(employee_id)
            })
        })
        .await?;

        tracing::info!("Created employee {}", created_id);

        self.get(&created_id).await
    }

    /// Validates and applies a partial update, moving the employee when `cafeId` is provided.
    ///
    /// An absent `cafeId` leaves the current assignment untouched. Moving to a different café
    /// resets the start date, moving to the current café keeps it.
    ///
    /// # Returns
    /// - `Ok(EmployeeDto)` - Updated employee with tenure
    /// - `Err(Error::ValidationError)` - A provided field fails its rule or the email is in use
    /// - `Err(Error::NotFoundError)` - Employee or `cafeId` café does not exist
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn update(
        &self,
        employee_id: &str,
        payload: EmployeePayload,
    ) -> Result<EmployeeDto, Error> {
        let ValidatedEmployeeChanges { changes, cafe_id } = validate_employee_changes(payload)?;
        let employee_repo = EmployeeRepository::new(self.db);

        if employee_repo.get_by_id(employee_id).await?.is_none() {
            return Err(NotFoundError::Employee(employee_id.to_string()).into());
        }
        if let Some(cafe_id) = &cafe_id {
            self.ensure_cafe_exists(cafe_id).await?;
        }
        if let Some(email_address) = &changes.email_address {
            let owner = employee_repo.get_by_email(email_address).await?;

            if owner.is_some_and(|owner| owner.id != employee_id) {
                return Err(ValidationError::EmailInUse.into());
            }
        }

        let id = employee_id.to_string();
        in_transaction(self.db, move |txn| {
            Box::pin(async move {
                if EmployeeRepository::new(txn)
                    .update(&id, changes)
                    .await?
                    .is_none()
                {
                    return Err(Error::from(NotFoundError::Employee(id)));
                }

                if let Some(cafe_id) = cafe_id {
                    AssignmentService::new(txn).attach(&id, &cafe_id).await?;
                }

                Ok(())
            })
        })
        .await?;

        self.get(employee_id).await
    }

    /// Deletes an employee and their assignment in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Employee deleted
    /// - `Err(Error::NotFoundError)` - No employee with the provided ID, nothing was deleted
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, employee_id: &str) -> Result<(), Error> {
        let employee_id = employee_id.to_string();

        in_transaction(self.db, |txn| {
            Box::pin(async move {
                let employee_repo = EmployeeRepository::new(txn);

                if employee_repo.get_by_id(&employee_id).await?.is_none() {
                    return Err(Error::from(NotFoundError::Employee(employee_id)));
                }

                AssignmentService::new(txn).detach(&employee_id).await?;
                employee_repo.delete(&employee_id).await?;

                tracing::info!("Deleted employee {}", employee_id);

                Ok(())
            })
        })
        .await
    }

    async fn ensure_cafe_exists(&self, cafe_id: &str) -> Result<(), Error> {
        match CafeRepository::new(self.db).get_by_id(cafe_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::Cafe(cafe_id.to_string()).into()),
        }
    }

    async fn unused_employee_id(&self) -> Result<String, Error> {
        let employee_repo = EmployeeRepository::new(self.db);

        for _ in 0..EMPLOYEE_ID_ATTEMPTS {
            let employee_id = generate_employee_id();

            if employee_repo.get_by_id(&employee_id).await?.is_none() {
                return Ok(employee_id);
            }
        }

        Err(Error::InternalError(format!(
            "No unused employee ID found after {} attempts",
            EMPLOYEE_ID_ATTEMPTS
        )))
    }
}
