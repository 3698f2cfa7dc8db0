use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::Error, service::upload::LogoStore};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Create the logo directory under the configured upload directory
pub async fn prepare_upload_dir(config: &Config) -> Result<LogoStore, Error> {
    let logo_store = LogoStore::new(config.upload_dir.clone());
    logo_store.ensure_dirs().await?;

    tracing::info!("Serving uploads from {}", config.upload_dir.display());

    Ok(logo_store)
}
