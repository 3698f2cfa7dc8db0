use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    db::EmployeeModel,
    employee::{EmployeeChanges, NewEmployee},
};

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    /// Creates a new instance of [`EmployeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new employee with the provided ID
    ///
    /// Returns a database error if the ID or email address is already taken.
    pub async fn create(
        &self,
        employee_id: &str,
        employee: NewEmployee,
    ) -> Result<EmployeeModel, DbErr> {
        let now = Utc::now().naive_utc();

        let employee = entity::employee::ActiveModel {
            id: ActiveValue::Set(employee_id.to_string()),
            name: ActiveValue::Set(employee.name),
            email_address: ActiveValue::Set(employee.email_address),
            phone_number: ActiveValue::Set(employee.phone_number),
            gender: ActiveValue::Set(employee.gender.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        employee.insert(self.db).await
    }

    pub async fn get_by_id(&self, employee_id: &str) -> Result<Option<EmployeeModel>, DbErr> {
        entity::prelude::Employee::find_by_id(employee_id.to_string())
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email_address: &str) -> Result<Option<EmployeeModel>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::EmailAddress.eq(email_address))
            .one(self.db)
            .await
    }

    /// Gets employees ordered by creation time, optionally restricted to the provided IDs
    pub async fn get_many(
        &self,
        employee_ids: Option<&[String]>,
    ) -> Result<Vec<EmployeeModel>, DbErr> {
        let mut query = entity::prelude::Employee::find();

        if let Some(employee_ids) = employee_ids {
            if employee_ids.is_empty() {
                return Ok(Vec::new());
            }

            query = query.filter(entity::employee::Column::Id.is_in(employee_ids.iter().cloned()));
        }

        query
            .order_by_asc(entity::employee::Column::CreatedAt)
            .order_by_asc(entity::employee::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided changes to an employee
    ///
    /// Returns `Ok(None)` if no employee exists with the provided ID.
    pub async fn update(
        &self,
        employee_id: &str,
        changes: EmployeeChanges,
    ) -> Result<Option<EmployeeModel>, DbErr> {
        let employee = match self.get_by_id(employee_id).await? {
            Some(employee) => employee,
            None => return Ok(None),
        };

        let mut employee_am = employee.into_active_model();
        if let Some(name) = changes.name {
            employee_am.name = ActiveValue::Set(name);
        }
        if let Some(email_address) = changes.email_address {
            employee_am.email_address = ActiveValue::Set(email_address);
        }
        if let Some(phone_number) = changes.phone_number {
            employee_am.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(gender) = changes.gender {
            employee_am.gender = ActiveValue::Set(gender.to_string());
        }
        employee_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let employee = employee_am.update(self.db).await?;

        Ok(Some(employee))
    }

    /// Deletes an employee
    ///
    /// Returns OK regardless of the employee existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, employee_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Employee::delete_by_id(employee_id.to_string())
            .exec(self.db)
            .await
    }
}
