//! Café CRUD with logo handling and employee counts.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::cafe::{CafeDto, CafePayload},
    server::{
        data::{cafe::CafeRepository, employee_cafe::EmployeeCafeRepository},
        error::{not_found::NotFoundError, Error},
        model::{db::CafeModel, upload::LogoUpload},
        service::upload::LogoStore,
        util::transaction::in_transaction,
        validation::cafe::{validate_cafe_changes, validate_new_cafe},
    },
};

/// Service for listing, creating, updating, and deleting cafés.
pub struct CafeService<'a> {
    db: &'a DatabaseConnection,
    logo_store: &'a LogoStore,
}

impl<'a> CafeService<'a> {
    /// Creates a new instance of [`CafeService`]
    pub fn new(db: &'a DatabaseConnection, logo_store: &'a LogoStore) -> Self {
        Self { db, logo_store }
    }

    /// Lists cafés with their employee count, most employees first.
    ///
    /// # Arguments
    /// - `location` - Only return cafés at exactly this location
    pub async fn list(&self, location: Option<&str>) -> Result<Vec<CafeDto>, Error> {
        let cafes = CafeRepository::new(self.db).get_many(location).await?;

        let cafe_ids: Vec<String> = cafes.iter().map(|cafe| cafe.id.clone()).collect();
        let counts = EmployeeCafeRepository::new(self.db)
            .count_by_cafe_ids(&cafe_ids)
            .await?;

        let mut cafes: Vec<CafeDto> = cafes
            .into_iter()
            .map(|cafe| {
                let employees = counts.get(&cafe.id).copied().unwrap_or(0);
                to_cafe_dto(cafe, employees)
            })
            .collect();

        cafes.sort_by(|a, b| b.employees.cmp(&a.employees));

        Ok(cafes)
    }

    /// Gets a café with its employee count.
    ///
    /// # Returns
    /// - `Ok(CafeDto)` - Café found
    /// - `Err(Error::NotFoundError)` - No café with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, cafe_id: &str) -> Result<CafeDto, Error> {
        let cafe = CafeRepository::new(self.db)
            .get_by_id(cafe_id)
            .await?
            .ok_or_else(|| NotFoundError::Cafe(cafe_id.to_string()))?;

        self.with_employee_count(cafe).await
    }

    /// Validates and creates a café, storing the uploaded logo if provided.
    ///
    /// Text fields are validated before the logo is written. The logo is removed again if
    /// the café cannot be inserted.
    ///
    /// # Returns
    /// - `Ok(CafeDto)` - Created café, with 0 employees
    /// - `Err(Error::ValidationError)` - Payload fails a field rule
    /// - `Err(Error::UploadError)` - Logo is not an accepted image or is too large
    /// - `Err(Error::DbErr)` / `Err(Error::IoError)` - Storage failed
    pub async fn create(
        &self,
        payload: CafePayload,
        logo: Option<LogoUpload>,
    ) -> Result<CafeDto, Error> {
        let mut new_cafe = validate_new_cafe(payload)?;

        let stored_logo = self.store_logo(logo).await?;
        if let Some(path) = &stored_logo {
            new_cafe.logo = Some(path.clone());
        }

        match CafeRepository::new(self.db).create(new_cafe).await {
            Ok(cafe) => {
                tracing::info!("Created cafe {} ({})", cafe.name, cafe.id);

                Ok(to_cafe_dto(cafe, 0))
            }
            Err(err) => {
                self.discard_logo(stored_logo).await;

                Err(err.into())
            }
        }
    }

    /// Validates and applies a partial update, replacing the logo if one is uploaded.
    ///
    /// The café's existence is checked before the logo is written.
    ///
    /// # Returns
    /// - `Ok(CafeDto)` - Updated café with its employee count
    /// - `Err(Error::ValidationError)` - A provided field fails its rule
    /// - `Err(Error::UploadError)` - Logo is not an accepted image or is too large
    /// - `Err(Error::NotFoundError)` - No café with the provided ID
    pub async fn update(
        &self,
        cafe_id: &str,
        payload: CafePayload,
        logo: Option<LogoUpload>,
    ) -> Result<CafeDto, Error> {
        let mut changes = validate_cafe_changes(payload)?;
        let cafe_repo = CafeRepository::new(self.db);

        if cafe_repo.get_by_id(cafe_id).await?.is_none() {
            return Err(NotFoundError::Cafe(cafe_id.to_string()).into());
        }

        let stored_logo = self.store_logo(logo).await?;
        if let Some(path) = &stored_logo {
            changes.logo = Some(path.clone());
        }

        let cafe = match cafe_repo.update(cafe_id, changes).await {
            Ok(Some(cafe)) => cafe,
            Ok(None) => {
                self.discard_logo(stored_logo).await;

                return Err(NotFoundError::Cafe(cafe_id.to_string()).into());
            }
            Err(err) => {
                self.discard_logo(stored_logo).await;

                return Err(err.into());
            }
        };

        self.with_employee_count(cafe).await
    }

    /// Deletes a café and the assignments referencing it in one transaction.
    ///
    /// Employees previously assigned to the café are kept and become unassigned.
    ///
    /// # Returns
    /// - `Ok(())` - Café and its assignments were deleted
    /// - `Err(Error::NotFoundError)` - No café with the provided ID, nothing was deleted
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, cafe_id: &str) -> Result<(), Error> {
        let cafe_id = cafe_id.to_string();

        in_transaction(self.db, |txn| {
            Box::pin(async move {
                let cafe_repo = CafeRepository::new(txn);

                if cafe_repo.get_by_id(&cafe_id).await?.is_none() {
                    return Err(Error::from(NotFoundError::Cafe(cafe_id)));
                }

                let unassigned = EmployeeCafeRepository::new(txn)
                    .delete_by_cafe_id(&cafe_id)
                    .await?;
                cafe_repo.delete(&cafe_id).await?;

                tracing::info!(
                    "Deleted cafe {}, unassigned {} employees",
                    cafe_id,
                    unassigned.rows_affected
                );

                Ok(())
            })
        })
        .await
    }

    async fn with_employee_count(&self, cafe: CafeModel) -> Result<CafeDto, Error> {
        let counts = EmployeeCafeRepository::new(self.db)
            .count_by_cafe_ids(std::slice::from_ref(&cafe.id))
            .await?;
        let employees = counts.get(&cafe.id).copied().unwrap_or(0);

        Ok(to_cafe_dto(cafe, employees))
    }

    async fn store_logo(&self, logo: Option<LogoUpload>) -> Result<Option<String>, Error> {
        match logo {
            Some(logo) => Ok(Some(self.logo_store.save(logo).await?)),
            None => Ok(None),
        }
    }

    async fn discard_logo(&self, stored_logo: Option<String>) {
        let Some(path) = stored_logo else {
            return;
        };

        if let Err(err) = self.logo_store.remove(&path).await {
            tracing::warn!("Failed to remove orphaned logo {}: {}", path, err);
        }
    }
}

fn to_cafe_dto(cafe: CafeModel, employees: u64) -> CafeDto {
    CafeDto {
        id: cafe.id,
        name: cafe.name,
        description: cafe.description,
        logo: cafe.logo,
        location: cafe.location,
        employees,
    }
}
