//! Configuration management for the service
//!
//! This module handles loading, environment overrides and validation.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let app: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Apply `DATABASE_URL`, `JWT_SECRET`, `HOST`, `PORT` and `SECURE_COOKIES` overrides
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.app.storage.database.url = url;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.app.auth.jwt_secret = secret;
        }
        if let Ok(host) = std::env::var("HOST") {
            self.app.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.app.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid PORT: {}", e)))?;
        }
        if let Ok(secure) = std::env::var("SECURE_COOKIES") {
            self.app.auth.secure_cookies = matches!(secure.as_str(), "1" | "true" | "yes");
        }

        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Get import configuration
    pub fn import(&self) -> &ImportConfig {
        &self.app.import
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.app
            .server
            .cors
            .validate()
            .map_err(|e| GatewayError::Config(format!("CORS config error: {}", e)))?;

        self.app
            .storage
            .database
            .validate()
            .map_err(|e| GatewayError::Config(format!("Database config error: {}", e)))?;

        self.app
            .auth
            .validate(self.app.server.dev_mode)
            .map_err(|e| GatewayError::Config(format!("Auth config error: {}", e)))?;

        self.app
            .import
            .validate()
            .map_err(|e| GatewayError::Config(format!("Import config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.app = self.app.merge(other.app);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
