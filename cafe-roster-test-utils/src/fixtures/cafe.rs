//! Café fixture utilities.

use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};

use crate::{error::TestError, fixtures::factory};

/// Fixture helpers for inserting cafés, obtained through `TestContext::cafe`.
pub struct CafeFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CafeFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a café with a random UUID v4 identifier.
    ///
    /// # Returns
    /// - `Ok(entity::cafe::Model)` - The inserted café
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the café table is missing
    pub async fn insert_mock_cafe(
        &self,
        name: &str,
        location: &str,
    ) -> Result<entity::cafe::Model, TestError> {
        let cafe_id = uuid::Uuid::new_v4().to_string();

        self.insert_cafe_with_id(&cafe_id, name, location).await
    }

    /// Insert a café with a known identifier.
    pub async fn insert_cafe_with_id(
        &self,
        cafe_id: &str,
        name: &str,
        location: &str,
    ) -> Result<entity::cafe::Model, TestError> {
        let cafe = factory::mock_cafe_model(cafe_id, name, location)
            .into_active_model()
            .reset_all();

        Ok(cafe.insert(self.db).await?)
    }
}
