//! User accounts and roles

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role held by a user account
///
/// The set is closed: any stored value outside it is treated as [`UserRole::Viewer`]
/// by the role resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Read-only visitor
    #[default]
    Viewer,
    /// Records deposits and field data
    Geologist,
    /// Files and manages mining claims
    Explorer,
    /// Follows markets and analytics
    Investor,
    /// Full access
    Admin,
}

impl UserRole {
    /// Every role, in display order
    pub const ALL: [UserRole; 5] = [
        UserRole::Viewer,
        UserRole::Geologist,
        UserRole::Explorer,
        UserRole::Investor,
        UserRole::Admin,
    ];

    /// Stable name stored in the `users.role` column
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Viewer => "viewer",
            UserRole::Geologist => "geologist",
            UserRole::Explorer => "explorer",
            UserRole::Investor => "investor",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(UserRole::Viewer),
            "geologist" => Ok(UserRole::Geologist),
            "explorer" => Ok(UserRole::Explorer),
            "investor" => Ok(UserRole::Investor),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role name exactly as stored; resolve it through the role resolver
    pub role: String,
    /// Organization the user works for
    pub organization: Option<String>,
    /// Area of expertise
    pub expertise: Option<String>,
    /// Registration timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// Create a new account record
    pub fn new(
        username: String,
        password_hash: String,
        role: UserRole,
        organization: Option<String>,
        expertise: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            role: role.to_string(),
            organization,
            expertise,
            created_at: chrono::Utc::now(),
        }
    }
}
