use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::SqliteTaskRepository;
use eyre::WrapErr;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::sqlite::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("SQLite connection failed: {}", e))?;

    let repository = SqliteTaskRepository::new(db.clone());
    repository
        .init_schema()
        .await
        .wrap_err("Failed to create the tasks table")?;

    let routes = api::routes(repository)
        .merge(health_router(config.app))
        .merge(api::ready_router(db.clone()));

    let app = create_router::<openapi::ApiDoc>(routes);

    info!(
        "Starting {} {} with graceful shutdown (30s timeout)",
        config.app.name, config.app.version
    );

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("SQLite connection closed successfully"),
                Err(e) => tracing::error!("Error closing SQLite: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Taskify API shutdown complete");
    Ok(())
}
