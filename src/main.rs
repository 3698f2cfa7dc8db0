#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use cafe_roster::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, seed, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let (db, logo_store) = match startup::connect_to_database(&config).await {
            Ok(db) => match startup::prepare_upload_dir(&config).await {
                Ok(logo_store) => (db, logo_store),
                Err(e) => {
                    tracing::error!("Failed to prepare upload directory: {}", e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                tracing::error!("Failed to connect to database: {}", e);
                std::process::exit(1);
            }
        };

        if config.seed_database {
            match seed::seed_if_empty(&db).await {
                Ok(true) => tracing::info!("Seeded database with demo cafes and employees"),
                Ok(false) => tracing::info!("Database already populated, skipping seed"),
                Err(e) => tracing::error!("Failed to seed database: {}", e),
            }
        }

        tracing::info!("Starting server");

        let server_routes = server::router::routes(logo_store.dir(), &config.cors_origins)
            .with_state(AppState { db, logo_store });

        let mut router = dioxus::server::router(client::App);
        router = router.merge(server_routes);

        Ok(router)
    })
}
