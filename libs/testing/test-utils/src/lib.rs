//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestDatabase`: in-memory SQLite database (feature: "sqlite")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `sqlite` (default): Enables SQLite test infrastructure
//! - `all`: Enables all database test infrastructure
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_sqlite_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.title("main");
//!     let description = builder.description("main");
//! }
//! ```

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving all values from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_task");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("task", "main"), "test-task-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Task title, short enough for any title column
    pub fn title(&self, suffix: &str) -> String {
        self.name("task", suffix)
    }

    pub fn description(&self, suffix: &str) -> String {
        format!("description for {}", self.name("task", suffix))
    }

    /// A string of exactly `len` characters
    pub fn text_of_len(&self, len: usize) -> String {
        let alphabet = b"abcdefghijklmnopqrstuvwxyz";
        (0..len)
            .map(|i| {
                let index = (self.seed as usize).wrapping_add(i) % alphabet.len();
                alphabet[index] as char
            })
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that a storage-assigned id is usable
    pub fn assert_positive_id(id: u64, context: &str) {
        assert!(id > 0, "{}: expected a positive id, got {}", context, id);
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.title("a"), builder2.title("a"));
        assert_eq!(builder1.text_of_len(16), builder2.text_of_len(16));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.title("main"), builder2.title("main"));
    }

    #[test]
    fn test_text_of_len_counts_characters() {
        let builder = TestDataBuilder::from_test_name("lengths");

        assert_eq!(builder.text_of_len(0), "");
        assert_eq!(builder.text_of_len(255).chars().count(), 255);
    }
}
