use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QuerySelect,
};

use crate::server::model::db::AssignmentModel;

/// Repository for the `employee_cafe` table linking an employee to their current café.
///
/// The table holds at most one row per employee, enforced by a unique constraint on
/// `employee_id`. Moving an employee updates their row in place.
pub struct EmployeeCafeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeCafeRepository<'a, C> {
    /// Creates a new instance of [`EmployeeCafeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an assignment for an employee without one
    ///
    /// Returns a database error if the employee already has an assignment or if either
    /// the employee or café does not exist (foreign key constraint).
    pub async fn create(
        &self,
        employee_id: &str,
        cafe_id: &str,
        start_date: NaiveDate,
    ) -> Result<AssignmentModel, DbErr> {
        let now = Utc::now().naive_utc();

        let assignment = entity::employee_cafe::ActiveModel {
            employee_id: ActiveValue::Set(employee_id.to_string()),
            cafe_id: ActiveValue::Set(cafe_id.to_string()),
            start_date: ActiveValue::Set(start_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    pub async fn get_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<AssignmentModel>, DbErr> {
        entity::prelude::EmployeeCafe::find()
            .filter(entity::employee_cafe::Column::EmployeeId.eq(employee_id))
            .one(self.db)
            .await
    }

    /// Gets assignments, optionally restricted to a single café
    pub async fn get_many(&self, cafe_id: Option<&str>) -> Result<Vec<AssignmentModel>, DbErr> {
        let mut query = entity::prelude::EmployeeCafe::find();

        if let Some(cafe_id) = cafe_id {
            query = query.filter(entity::employee_cafe::Column::CafeId.eq(cafe_id));
        }

        query.all(self.db).await
    }

    /// Moves an existing assignment to another café, restarting it on `start_date`
    pub async fn update_cafe(
        &self,
        assignment: AssignmentModel,
        cafe_id: &str,
        start_date: NaiveDate,
    ) -> Result<AssignmentModel, DbErr> {
        let mut assignment_am = assignment.into_active_model();
        assignment_am.cafe_id = ActiveValue::Set(cafe_id.to_string());
        assignment_am.start_date = ActiveValue::Set(start_date);
        assignment_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        assignment_am.update(self.db).await
    }

    /// Deletes the assignment of an employee, if any
    pub async fn delete_by_employee_id(&self, employee_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::EmployeeCafe::delete_many()
            .filter(entity::employee_cafe::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await
    }

    /// Deletes every assignment referencing a café
    pub async fn delete_by_cafe_id(&self, cafe_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::EmployeeCafe::delete_many()
            .filter(entity::employee_cafe::Column::CafeId.eq(cafe_id))
            .exec(self.db)
            .await
    }

    /// Counts assigned employees per café
    ///
    /// Cafés without assignments are absent from the returned map.
    pub async fn count_by_cafe_ids(
        &self,
        cafe_ids: &[String],
    ) -> Result<HashMap<String, u64>, DbErr> {
        if cafe_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(String, i64)> = entity::prelude::EmployeeCafe::find()
            .select_only()
            .column(entity::employee_cafe::Column::CafeId)
            .column_as(
                Expr::from(Func::count(Expr::col(entity::employee_cafe::Column::Id))),
                "count",
            )
            .filter(entity::employee_cafe::Column::CafeId.is_in(cafe_ids.iter().cloned()))
            .group_by(entity::employee_cafe::Column::CafeId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(cafe_id, count)| (cafe_id, count.max(0) as u64))
            .collect())
    }
}
