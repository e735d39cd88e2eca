use crate::core::models::User;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Account by id; `None` for identities whose row is gone
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(|m| m.to_domain_user()))
    }

    /// Account by its login name, matched exactly
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let model = entities::User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(|m| m.to_domain_user()))
    }

    /// Store a new account and return the row as written.
    ///
    /// A username collision that slips past the registration check surfaces
    /// as a conflict rather than a storage failure.
    pub async fn create_user(&self, account: &User) -> Result<User> {
        debug!("Storing account {} ({})", account.username, account.role);

        let stored = user::Model::from_domain_user(account)
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    GatewayError::conflict("Username already exists")
                }
                _ => GatewayError::Database(e),
            })?;

        Ok(stored.to_domain_user())
    }
}
