//! Top-level application configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Application configuration as stored in the YAML file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication and role settings
    #[serde(default)]
    pub auth: AuthConfig,
    /// Geospatial import settings
    #[serde(default)]
    pub import: ImportConfig,
}

impl AppConfig {
    /// Merge application configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.storage = self.storage.merge(other.storage);
        self.auth = self.auth.merge(other.auth);
        self.import = self.import.merge(other.import);
        self
    }
}
