//! Core authentication system implementation

use super::context::AuthContext;
use super::jwt::JwtHandler;
use super::rbac::RbacSystem;
use super::types::{AuthMethod, LoginOutcome, Registration};
use crate::config::AuthConfig;
use crate::core::models::User;
use crate::storage::StorageLayer;
use crate::utils::auth::{generate_session_token, hash_password, verify_password};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{validate_password_strength, validate_profile, validate_username};
use std::sync::Arc;
use tracing::{debug, info, warn};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Storage layer for user data
    storage: Arc<StorageLayer>,
    /// JWT handler
    jwt: Arc<JwtHandler>,
    /// RBAC system
    rbac: Arc<RbacSystem>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        info!("Initializing authentication system");

        let config = Arc::new(config.clone());
        let jwt = Arc::new(JwtHandler::new(&config));
        let rbac = Arc::new(RbacSystem::new(&config.rbac));

        Self {
            config,
            storage,
            jwt,
            rbac,
        }
    }

    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Account behind a credential, if the credential is live.
    ///
    /// Invalid, expired or dangling credentials yield `None`; only storage
    /// failures are errors.
    pub async fn identify(&self, method: &AuthMethod) -> Result<Option<User>> {
        let db = &self.storage.database;

        let user_id = match method {
            AuthMethod::Session(token) => db.find_session_user(token).await?,
            AuthMethod::Jwt(token) => match self.jwt.verify_token(token) {
                Ok(claims) => Some(claims.sub),
                Err(e) => {
                    debug!("Ignoring invalid bearer token: {}", e);
                    None
                }
            },
            AuthMethod::None => None,
        };

        match user_id {
            Some(id) => db.find_user_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Resolve the request-scoped context for a credential
    pub async fn resolve_context(&self, method: &AuthMethod) -> Result<AuthContext> {
        let user = self.identify(method).await?;
        Ok(self.rbac.context_for(user.as_ref()))
    }

    /// Create an account from the self-service form
    pub async fn register(&self, registration: Registration) -> Result<User> {
        let Registration {
            username,
            password,
            confirmation,
            role,
            organization,
            expertise,
        } = registration;

        let username = username.trim().to_string();
        validate_username(&username)?;
        validate_password_strength(&password)?;
        if password != confirmation {
            return Err(GatewayError::validation("Passwords don't match"));
        }

        let organization = organization
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty());
        let expertise = expertise
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        validate_profile(
            organization.as_deref().unwrap_or_default(),
            expertise.as_deref().unwrap_or_default(),
        )?;

        let db = &self.storage.database;
        if db.find_user_by_username(&username).await?.is_some() {
            return Err(GatewayError::conflict("Username already exists"));
        }

        let role = self.rbac.registration_role(role.as_deref());
        let user = User::new(
            username,
            hash_password(&password)?,
            role,
            organization,
            expertise,
        );

        let user = db.create_user(&user).await?;
        info!("Registered user {} with role {}", user.username, role);
        Ok(user)
    }

    /// Verify credentials and open a session
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        user_agent: Option<String>,
    ) -> Result<LoginOutcome> {
        info!("User login attempt: {}", username);
        let db = &self.storage.database;

        let Some(user) = db.find_user_by_username(username.trim()).await? else {
            return Err(GatewayError::auth(INVALID_CREDENTIALS));
        };

        if !verify_password(password, &user.password_hash)? {
            warn!("Failed login for user {}", user.id);
            return Err(GatewayError::auth(INVALID_CREDENTIALS));
        }

        if let Err(e) = db.purge_expired_sessions().await {
            warn!("Failed to purge expired sessions: {}", e);
        }

        let session_token = generate_session_token();
        let session_expires_at = chrono::Utc::now()
            + chrono::Duration::seconds(self.config.session_lifetime as i64);
        db.create_session(&session_token, user.id, session_expires_at, user_agent)
            .await?;

        let access_token = self.jwt.create_access_token(user.id)?;

        info!("User {} logged in", user.id);
        Ok(LoginOutcome {
            user,
            session_token,
            session_expires_at,
            access_token,
        })
    }

    /// Close a session
    pub async fn logout(&self, session_token: &str) -> Result<()> {
        self.storage.database.delete_session(session_token).await
    }
}
