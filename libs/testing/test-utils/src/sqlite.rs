//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` backed by an in-memory SQLite database. Each
//! instance is private to its test and disappears when dropped.

use database::sqlite::{SqliteConfig, check_health, connect_from_config};
use sea_orm::DatabaseConnection;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// In-memory SQLite database for a single test
///
/// The pool is pinned to one connection: every new SQLite connection to
/// `:memory:` opens a fresh, empty database.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new empty in-memory database
    ///
    /// Schema creation is left to the repository under test.
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = connect_from_config(SqliteConfig::new(IN_MEMORY_URL))
            .await
            .expect("Failed to open in-memory SQLite database");

        check_health(&connection)
            .await
            .expect("In-memory SQLite database is not answering");

        tracing::info!("Test database ready (SQLite in-memory)");

        Self { connection }
    }

    /// Get a handle to the database
    ///
    /// Clones share the same underlying pool, and therefore the same data.
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_connection_clones_share_state() {
        let db = TestDatabase::new().await;

        db.connection()
            .execute_unprepared("CREATE TABLE probe (id INTEGER PRIMARY KEY)")
            .await
            .unwrap();

        db.connection()
            .execute_unprepared("INSERT INTO probe (id) VALUES (1)")
            .await
            .unwrap();
    }
}
