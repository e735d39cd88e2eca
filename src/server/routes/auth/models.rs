//! Request and response models for authentication endpoints

use crate::core::models::{User, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of an account
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    /// Effective role after resolution
    pub role: UserRole,
    pub organization: Option<String>,
    pub expertise: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl UserInfo {
    pub fn new(user: &User, role: UserRole) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role,
            organization: user.organization.clone(),
            expertise: user.expertise.clone(),
            created_at: user.created_at,
        }
    }
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserInfo,
    pub access_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

/// Current account with its capabilities
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserInfo,
    pub role_name: String,
    pub permissions: Vec<&'static str>,
}
