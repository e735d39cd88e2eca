//! Request-scoped authorization context

use super::rbac::{Permission, PermissionSet};
use crate::core::models::UserRole;
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use uuid::Uuid;

/// Who is calling and what they may do.
///
/// Built once per request from the session identity and passed to every guarded
/// operation. Role predicates treat `admin` as holding every role except in
/// [`AuthContext::is_admin`], which checks for `admin` itself.
#[derive(Debug, Clone, Serialize)]
pub struct AuthContext {
    user_id: Option<Uuid>,
    username: Option<String>,
    role: UserRole,
    permissions: PermissionSet,
}

impl AuthContext {
    pub fn new(
        user_id: Option<Uuid>,
        username: Option<String>,
        role: UserRole,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            user_id,
            username,
            role,
            permissions,
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Token check; false for unknown tokens unless the role holds the wildcard
    pub fn has_permission_token(&self, token: &str) -> bool {
        self.permissions.contains_token(token)
    }

    /// Exactly `admin`
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Holds `role`, or is admin
    pub fn is_role(&self, role: UserRole) -> bool {
        self.role == role || self.is_admin()
    }

    pub fn is_geologist(&self) -> bool {
        self.is_role(UserRole::Geologist)
    }

    pub fn is_explorer(&self) -> bool {
        self.is_role(UserRole::Explorer)
    }

    pub fn is_investor(&self) -> bool {
        self.is_role(UserRole::Investor)
    }

    /// The caller's user id, or an authentication error
    pub fn require_login(&self) -> Result<Uuid> {
        self.user_id
            .ok_or_else(|| GatewayError::auth("Authentication required"))
    }

    pub fn require_permission(&self, permission: Permission) -> Result<()> {
        if self.has_permission(permission) {
            return Ok(());
        }
        self.require_login()?;
        Err(GatewayError::forbidden(format!(
            "Missing permission: {}",
            permission
        )))
    }

    pub fn require_role(&self, role: UserRole) -> Result<()> {
        self.require_login()?;
        if self.is_role(role) {
            Ok(())
        } else {
            Err(GatewayError::forbidden(format!("Requires {} role", role)))
        }
    }

    pub fn require_admin(&self) -> Result<()> {
        self.require_role(UserRole::Admin)
    }
}
