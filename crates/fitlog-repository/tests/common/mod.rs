//! Common test infrastructure for database integration tests.

use fitlog_repository::DatabasePool;
use std::sync::Arc;

/// Test database wrapper.
///
/// Each instance owns a private, migrated in-memory SQLite database.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new migrated test database.
    pub async fn new() -> Self {
        let pool = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}
