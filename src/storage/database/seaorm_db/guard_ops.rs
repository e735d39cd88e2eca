use crate::auth::guards::{Ownership, OwnershipLookup, RecordKind};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use sea_orm::*;

use super::super::entities;
use super::types::SeaOrmDatabase;

#[async_trait]
impl OwnershipLookup for SeaOrmDatabase {
    async fn ownership(&self, kind: RecordKind, record_id: i32) -> Result<Ownership> {
        let owner = match kind {
            RecordKind::Deposit => entities::Deposit::find_by_id(record_id)
                .one(&self.db)
                .await
                .map_err(GatewayError::Database)?
                .map(|d| d.created_by),
            RecordKind::Claim => entities::MiningClaim::find_by_id(record_id)
                .one(&self.db)
                .await
                .map_err(GatewayError::Database)?
                .map(|c| c.owner_id),
        };

        Ok(owner.map_or(Ownership::Missing, Ownership::Owned))
    }
}
