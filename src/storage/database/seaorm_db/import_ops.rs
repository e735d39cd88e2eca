use crate::core::import::ImportStore;
use crate::core::models::{NewClaim, NewDeposit};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use sea_orm::*;

use super::super::entities::{self, deposit, mining_claim};
use super::types::SeaOrmDatabase;

// Each insert is its own statement, committed independently
#[async_trait]
impl ImportStore for SeaOrmDatabase {
    async fn deposit_exists(&self, name: &str, latitude: f64, longitude: f64) -> Result<bool> {
        self.deposit_exists_at(name, latitude, longitude).await
    }

    async fn insert_deposit(&self, new: &NewDeposit) -> Result<()> {
        entities::Deposit::insert(deposit::Model::from_new_deposit(new))
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(())
    }

    async fn claim_exists(&self, claim_id: &str) -> Result<bool> {
        SeaOrmDatabase::claim_exists(self, claim_id).await
    }

    async fn insert_claim(&self, new: &NewClaim) -> Result<()> {
        entities::MiningClaim::insert(mining_claim::Model::from_new_claim(new))
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(())
    }

    async fn mineral_type_exists(&self, id: i32) -> Result<bool> {
        let found = entities::MineralType::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(found.is_some())
    }
}
