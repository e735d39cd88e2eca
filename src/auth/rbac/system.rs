//! RBAC system core functionality

use crate::auth::context::AuthContext;
use crate::config::RbacConfig;
use crate::core::models::{User, UserRole};
use std::str::FromStr;
use tracing::{debug, info, warn};

use super::roles::definition_for;
use super::types::{Permission, PermissionSet, RoleDefinition};

/// Role resolver and permission evaluator
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    config: RbacConfig,
    /// Role definitions, indexed by role discriminant
    roles: Vec<RoleDefinition>,
}

impl RbacSystem {
    /// Create a new RBAC system from the static role table
    pub fn new(config: &RbacConfig) -> Self {
        info!("Initializing RBAC system");

        let roles = UserRole::ALL
            .iter()
            .map(|role| definition_for(*role))
            .collect();

        Self {
            config: config.clone(),
            roles,
        }
    }

    /// Map a stored role name to a role.
    ///
    /// Missing and unrecognized values resolve to [`UserRole::Viewer`]; nothing is written back.
    pub fn resolve_stored_role(&self, stored: Option<&str>) -> UserRole {
        match stored.map(UserRole::from_str) {
            Some(Ok(role)) => role,
            Some(Err(e)) => {
                warn!("Falling back to viewer role: {}", e);
                UserRole::Viewer
            }
            None => UserRole::Viewer,
        }
    }

    /// Effective role for an optional account
    pub fn resolve_role(&self, user: Option<&User>) -> UserRole {
        match user {
            Some(user) => self.resolve_stored_role(Some(&user.role)),
            None => UserRole::Viewer,
        }
    }

    /// Build the request-scoped context for an optional account
    pub fn context_for(&self, user: Option<&User>) -> AuthContext {
        let role = self.resolve_role(user);
        debug!(role = %role, authenticated = user.is_some(), "Resolved request role");

        AuthContext::new(
            user.map(|u| u.id),
            user.map(|u| u.username.clone()),
            role,
            self.permissions_for(role).clone(),
        )
    }

    /// Permission set of a role
    pub fn permissions_for(&self, role: UserRole) -> &PermissionSet {
        &self.get_role(role).permissions
    }

    /// Whether a role holds a capability
    pub fn has_permission(&self, role: UserRole, permission: Permission) -> bool {
        self.permissions_for(role).contains(permission)
    }

    /// Token form of [`Self::has_permission`]; unknown tokens are granted only to admin
    pub fn has_permission_token(&self, role: UserRole, token: &str) -> bool {
        self.permissions_for(role).contains_token(token)
    }

    /// Definition of a role
    pub fn get_role(&self, role: UserRole) -> &RoleDefinition {
        // Built from UserRole::ALL, whose order matches the discriminants
        &self.roles[role as usize]
    }

    /// All role definitions in display order
    pub fn list_roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    /// Role a new account receives for the requested role name
    pub fn registration_role(&self, requested: Option<&str>) -> UserRole {
        self.config.registration_role(requested)
    }
}
