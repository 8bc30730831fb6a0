//! Database library providing the SQLite connector used by the task service
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite::{self, SqliteConfig};
//!
//! let db = sqlite::connect_from_config(SqliteConfig::new("sqlite://tasks.db?mode=rwc")).await?;
//! sqlite::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
