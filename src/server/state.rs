//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so every worker shares one copy.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthSystem, storage: Arc<StorageLayer>) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage,
        }
    }

    /// Connect storage, apply migrations when enabled and set up authentication
    pub async fn initialize(config: Config) -> Result<Self> {
        let storage = Arc::new(StorageLayer::new(config.storage()).await?);
        if config.storage().database.auto_migrate {
            storage.migrate().await?;
        } else {
            info!("Automatic migrations disabled");
        }

        let auth = AuthSystem::new(config.auth(), storage.clone());
        Ok(Self::new(config, auth, storage))
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the database
    pub fn db(&self) -> &crate::storage::database::Database {
        &self.storage.database
    }
}
