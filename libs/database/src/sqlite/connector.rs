use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use super::SqliteConfig;
use crate::common::DatabaseResult;

/// Connect to a SQLite database with default pool settings
///
/// ```ignore
/// use database::sqlite::connect;
///
/// let db = connect("sqlite://tasks.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> DatabaseResult<DatabaseConnection> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a SqliteConfig
///
/// This is the recommended way to connect when using configuration.
pub async fn connect_from_config(config: SqliteConfig) -> DatabaseResult<DatabaseConnection> {
    let url = config.url.clone();
    let db = connect_with_options(config.into_connect_options()).await?;
    info!(url = %url, "Successfully connected to SQLite database");
    Ok(db)
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    Database::connect(options).await
}
