use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    cafe::{CafeChanges, NewCafe},
    db::CafeModel,
};

pub struct CafeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CafeRepository<'a, C> {
    /// Creates a new instance of [`CafeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new café with a freshly generated UUID v4 identifier
    pub async fn create(&self, cafe: NewCafe) -> Result<CafeModel, DbErr> {
        let now = Utc::now().naive_utc();

        let cafe = entity::cafe::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(cafe.name),
            description: ActiveValue::Set(cafe.description),
            logo: ActiveValue::Set(cafe.logo),
            location: ActiveValue::Set(cafe.location),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        cafe.insert(self.db).await
    }

    pub async fn get_by_id(&self, cafe_id: &str) -> Result<Option<CafeModel>, DbErr> {
        entity::prelude::Cafe::find_by_id(cafe_id.to_string())
            .one(self.db)
            .await
    }

    /// Gets all cafés, optionally restricted to an exact location
    ///
    /// Results are ordered by creation time so callers sorting on derived values get a
    /// stable order for ties.
    pub async fn get_many(&self, location: Option<&str>) -> Result<Vec<CafeModel>, DbErr> {
        let mut query = entity::prelude::Cafe::find();

        if let Some(location) = location {
            query = query.filter(entity::cafe::Column::Location.eq(location));
        }

        query
            .order_by_asc(entity::cafe::Column::CreatedAt)
            .order_by_asc(entity::cafe::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the cafés with the provided IDs, IDs without a café are skipped
    pub async fn get_many_by_ids(&self, cafe_ids: &[String]) -> Result<Vec<CafeModel>, DbErr> {
        if cafe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Cafe::find()
            .filter(entity::cafe::Column::Id.is_in(cafe_ids.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a café
    ///
    /// Returns `Ok(None)` if no café exists with the provided ID.
    pub async fn update(
        &self,
        cafe_id: &str,
        changes: CafeChanges,
    ) -> Result<Option<CafeModel>, DbErr> {
        let cafe = match self.get_by_id(cafe_id).await? {
            Some(cafe) => cafe,
            None => return Ok(None),
        };

        let mut cafe_am = cafe.into_active_model();
        if let Some(name) = changes.name {
            cafe_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            cafe_am.description = ActiveValue::Set(description);
        }
        if let Some(location) = changes.location {
            cafe_am.location = ActiveValue::Set(location);
        }
        if let Some(logo) = changes.logo {
            cafe_am.logo = ActiveValue::Set(Some(logo));
        }
        cafe_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let cafe = cafe_am.update(self.db).await?;

        Ok(Some(cafe))
    }

    /// Deletes a café
    ///
    /// Returns OK regardless of the café existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field. Assignments referencing the café
    /// must be removed first.
    pub async fn delete(&self, cafe_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Cafe::delete_by_id(cafe_id.to_string())
            .exec(self.db)
            .await
    }
}
