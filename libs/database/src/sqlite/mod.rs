//! SQLite database connector and utilities
//!
//! Provides connection management and health checks for the file-backed (or
//! in-memory) SQLite store.

mod config;
mod connector;
mod health;

pub use config::{SqliteConfig, DEFAULT_DATABASE_URL};
pub use connector::{connect, connect_from_config, connect_with_options};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
