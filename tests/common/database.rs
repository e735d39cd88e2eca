//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database with migrations applied.

use georesource_explorer::config::DatabaseConfig;
use georesource_explorer::storage::StorageLayer;
use georesource_explorer::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new in-memory test database
    ///
    /// An in-memory database lives on one connection, so the pool is capped at one.
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Storage layer sharing this database
    pub fn storage(&self) -> Arc<StorageLayer> {
        Arc::new(StorageLayer {
            database: Arc::clone(&self.inner),
        })
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
        auto_migrate: true,
    }
}
