use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sqlite::SqliteConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqliteConfig::from_env()?; // DATABASE_URL defaults to ./tasks.db
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3333

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
