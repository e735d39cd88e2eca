//! Authentication configuration

use super::*;
use crate::core::models::user::UserRole;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT secret
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Server-side session lifetime in seconds
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime: u64,
    /// Mark the session cookie `Secure`
    #[serde(default)]
    pub secure_cookies: bool,
    /// Role configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            session_lifetime: default_session_lifetime(),
            secure_cookies: false,
            rbac: RbacConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.jwt_secret.is_empty() {
            self.jwt_secret = other.jwt_secret;
        }
        if other.jwt_expiration != default_jwt_expiration() {
            self.jwt_expiration = other.jwt_expiration;
        }
        if other.session_lifetime != default_session_lifetime() {
            self.session_lifetime = other.session_lifetime;
        }
        if other.secure_cookies {
            self.secure_cookies = true;
        }
        self.rbac = self.rbac.merge(other.rbac);
        self
    }

    /// Validate authentication configuration; dev mode tolerates a short secret
    pub fn validate(&self, dev_mode: bool) -> Result<(), String> {
        if self.jwt_secret.len() < 32 && !dev_mode {
            return Err(
                "JWT secret must be at least 32 characters long for security".to_string(),
            );
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.session_lifetime == 0 {
            return Err("Session lifetime cannot be 0".to_string());
        }

        self.rbac.validate()
    }
}

/// Role assignment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role given to new accounts that ask for nothing or for a role they cannot pick
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Roles a visitor may choose at registration
    #[serde(default = "default_self_service_roles")]
    pub self_service_roles: Vec<String>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            self_service_roles: default_self_service_roles(),
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.self_service_roles != default_self_service_roles() {
            self.self_service_roles = other.self_service_roles;
        }
        self
    }

    /// Every configured role name must exist in the role table
    pub fn validate(&self) -> Result<(), String> {
        UserRole::from_str(&self.default_role)?;
        for role in &self.self_service_roles {
            UserRole::from_str(role)?;
        }
        Ok(())
    }

    /// Role assigned at registration for the requested role name
    pub fn registration_role(&self, requested: Option<&str>) -> UserRole {
        let fallback = UserRole::from_str(&self.default_role).unwrap_or_default();
        match requested {
            Some(name) if self.self_service_roles.iter().any(|r| r == name) => {
                UserRole::from_str(name).unwrap_or(fallback)
            }
            _ => fallback,
        }
    }
}

fn default_jwt_expiration() -> u64 {
    86400
}

fn default_session_lifetime() -> u64 {
    1800
}

fn default_role() -> String {
    UserRole::Viewer.to_string()
}

fn default_self_service_roles() -> Vec<String> {
    [
        UserRole::Viewer,
        UserRole::Geologist,
        UserRole::Explorer,
        UserRole::Investor,
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// Generate a secure random JWT secret
fn generate_secure_jwt_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
