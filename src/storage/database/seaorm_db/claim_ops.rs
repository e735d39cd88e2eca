use crate::core::models::{ClaimChanges, ClaimFilter, ClaimMapPoint, MiningClaim, NewClaim};
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, mining_claim};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Browse claims, newest first
    pub async fn list_claims(&self, filter: &ClaimFilter) -> Result<Vec<MiningClaim>> {
        let mut query = entities::MiningClaim::find();

        if let Some(q) = filter.q.as_deref().filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(mining_claim::Column::ClaimId.contains(q))
                    .add(mining_claim::Column::CompanyName.contains(q)),
            );
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(mining_claim::Column::Status.eq(status));
        }

        let models = query
            .order_by_desc(mining_claim::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.into_iter().map(MiningClaim::from).collect())
    }

    /// Claims with coordinates for the map layer
    pub async fn claim_map_points(&self, status: Option<&str>) -> Result<Vec<ClaimMapPoint>> {
        let mut query = entities::MiningClaim::find()
            .find_also_related(entities::Deposit)
            .filter(mining_claim::Column::Latitude.is_not_null())
            .filter(mining_claim::Column::Longitude.is_not_null());

        if let Some(status) = status.filter(|s| !s.is_empty()) {
            query = query.filter(mining_claim::Column::Status.eq(status));
        }

        let rows = query
            .order_by_asc(mining_claim::Column::ClaimId)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(rows
            .into_iter()
            .filter_map(|(c, deposit)| {
                Some(ClaimMapPoint {
                    id: c.id,
                    claim_id: c.claim_id,
                    company_name: c.company_name,
                    latitude: c.latitude?,
                    longitude: c.longitude?,
                    area_hectares: c.area_hectares,
                    status: c.status,
                    claim_type: c.claim_type,
                    deposit_name: deposit.map(|d| d.name),
                })
            })
            .collect())
    }

    /// Find claim by its external identifier
    pub async fn find_claim_by_claim_id(&self, claim_id: &str) -> Result<Option<MiningClaim>> {
        debug!("Finding claim: {}", claim_id);

        let model = entities::MiningClaim::find()
            .filter(mining_claim::Column::ClaimId.eq(claim_id))
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(MiningClaim::from))
    }

    /// Claims filed on a deposit
    pub async fn claims_for_deposit(&self, deposit_id: i32) -> Result<Vec<MiningClaim>> {
        let models = entities::MiningClaim::find()
            .filter(mining_claim::Column::DepositId.eq(deposit_id))
            .order_by_asc(mining_claim::Column::ClaimId)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.into_iter().map(MiningClaim::from).collect())
    }

    /// Whether a claim with this external identifier exists
    pub async fn claim_exists(&self, claim_id: &str) -> Result<bool> {
        let count = entities::MiningClaim::find()
            .filter(mining_claim::Column::ClaimId.eq(claim_id))
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(count > 0)
    }

    /// Insert a claim and return the stored row
    pub async fn create_claim(&self, new: &NewClaim) -> Result<MiningClaim> {
        debug!("Creating claim: {}", new.claim_id);

        let model = mining_claim::Model::from_new_claim(new)
            .insert(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.into())
    }

    /// Apply changes to a claim; `None` when it does not exist
    pub async fn update_claim(&self, id: i32, changes: &ClaimChanges) -> Result<Option<MiningClaim>> {
        let Some(model) = entities::MiningClaim::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?
        else {
            return Ok(None);
        };

        let mut active: mining_claim::ActiveModel = model.into();
        if let Some(v) = changes.deposit_id {
            active.deposit_id = Set(Some(v));
        }
        if let Some(v) = &changes.company_name {
            active.company_name = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.location_description {
            active.location_description = Set(Some(v.clone()));
        }
        if let Some(v) = changes.area_hectares {
            active.area_hectares = Set(Some(v));
        }
        if let Some(v) = &changes.claim_type {
            active.claim_type = Set(v.clone());
        }
        if let Some(v) = changes.issue_date {
            active.issue_date = Set(Some(v));
        }
        if let Some(v) = changes.expiry_date {
            active.expiry_date = Set(Some(v));
        }
        if let Some(v) = &changes.status {
            active.status = Set(v.clone());
        }
        if let Some(v) = changes.latitude {
            active.latitude = Set(Some(v));
        }
        if let Some(v) = changes.longitude {
            active.longitude = Set(Some(v));
        }

        let model = active
            .update(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(Some(model.into()))
    }

    /// Delete a claim; false when it does not exist
    pub async fn delete_claim(&self, id: i32) -> Result<bool> {
        let result = entities::MiningClaim::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(result.rows_affected > 0)
    }

    /// Delete every claim
    pub async fn clear_claims(&self) -> Result<u64> {
        let result = entities::MiningClaim::delete_many()
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(result.rows_affected)
    }

    /// Most recent claims owned by a user
    pub async fn recent_claims_by(&self, user_id: Uuid, limit: u64) -> Result<Vec<MiningClaim>> {
        let models = entities::MiningClaim::find()
            .filter(mining_claim::Column::OwnerId.eq(user_id))
            .order_by_desc(mining_claim::Column::CreatedAt)
            .order_by_desc(mining_claim::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.into_iter().map(MiningClaim::from).collect())
    }
}
