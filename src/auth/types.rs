//! Authentication types

use crate::core::models::User;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Credential presented with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// JWT token authentication
    Jwt(String),
    /// Session-based authentication
    Session(String),
    /// No authentication
    None,
}

/// Self-service registration form
#[derive(Clone, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(alias = "confirm")]
    pub confirmation: String,
    /// Requested role; anything outside the self-service list yields the default role
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub expertise: Option<String>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Credentials issued by a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    /// Server-side session token, carried by the `session` cookie
    pub session_token: String,
    pub session_expires_at: DateTime<Utc>,
    /// Bearer token for API clients
    pub access_token: String,
}
