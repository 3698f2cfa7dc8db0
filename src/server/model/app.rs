use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::service::upload::LogoStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub logo_store: LogoStore,
}

/// Builds the state from a connection and the upload directory, used by startup and tests.
impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, upload_dir): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            logo_store: LogoStore::new(upload_dir),
        }
    }
}
