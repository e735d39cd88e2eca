use crate::utils::error::{GatewayError, Result};
use chrono::{DateTime, Utc};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user_session};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Store a new login session
    pub async fn create_session(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
        user_agent: Option<String>,
    ) -> Result<()> {
        debug!("Creating session for user: {}", user_id);

        let session = user_session::ActiveModel {
            id: Set(token.to_string()),
            user_id: Set(user_id),
            expires_at: Set(expires_at.into()),
            created_at: Set(Utc::now().into()),
            user_agent: Set(user_agent),
        };

        entities::UserSession::insert(session)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(())
    }

    /// Resolve a session token to its user; an expired session is deleted
    pub async fn find_session_user(&self, token: &str) -> Result<Option<Uuid>> {
        let Some(session) = entities::UserSession::find_by_id(token.to_string())
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?
        else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            debug!("Session for user {} expired", session.user_id);
            self.delete_session(token).await?;
            return Ok(None);
        }

        Ok(Some(session.user_id))
    }

    /// Delete a session by token
    pub async fn delete_session(&self, token: &str) -> Result<()> {
        entities::UserSession::delete_by_id(token.to_string())
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(())
    }

    /// Delete every session past its expiry
    pub async fn purge_expired_sessions(&self) -> Result<u64> {
        let result = entities::UserSession::delete_many()
            .filter(user_session::Column::ExpiresAt.lte(Utc::now()))
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        debug!("Purged {} expired sessions", result.rows_affected);
        Ok(result.rows_affected)
    }
}
