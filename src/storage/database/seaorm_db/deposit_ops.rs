use crate::core::models::{
    Deposit, DepositChanges, DepositFilter, DepositMapPoint, MapFilter, NewDeposit,
};
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::{debug, info};
use uuid::Uuid;

use super::super::entities::{self, deposit, mining_claim};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Browse deposits, newest first
    pub async fn list_deposits(&self, filter: &DepositFilter) -> Result<Vec<Deposit>> {
        let mut query = entities::Deposit::find();

        if let Some(q) = filter.q.as_deref().filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(deposit::Column::Name.contains(q))
                    .add(deposit::Column::LocationName.contains(q)),
            );
        }
        if let Some(mineral) = filter.mineral {
            query = query.filter(deposit::Column::MineralTypeId.eq(mineral));
        }
        if let Some(country) = filter.country.as_deref().filter(|c| !c.is_empty()) {
            query = query.filter(deposit::Column::Country.eq(country));
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(deposit::Column::Status.eq(status));
        }

        let models = query
            .order_by_desc(deposit::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.into_iter().map(Deposit::from).collect())
    }

    /// Deposits for the map layer, joined with their mineral type and ordered by name
    pub async fn deposit_map_points(&self, filter: &MapFilter) -> Result<Vec<DepositMapPoint>> {
        let mut query = entities::Deposit::find().find_also_related(entities::MineralType);

        if let Some(mineral_id) = filter.mineral_id {
            query = query.filter(deposit::Column::MineralTypeId.eq(mineral_id));
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(deposit::Column::Status.eq(status));
        }

        let rows = query
            .order_by_asc(deposit::Column::Name)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(rows
            .into_iter()
            .map(|(d, mineral)| DepositMapPoint {
                id: d.id,
                name: d.name,
                latitude: d.latitude,
                longitude: d.longitude,
                region: d.region,
                mineral: mineral.map(|m| m.name),
                status: d.status,
                estimated_reserves_tonnes: d.estimated_reserves_tonnes,
                average_grade: d.average_grade,
                confidence_level: d.confidence_level,
            })
            .collect())
    }

    /// Find deposit by ID
    pub async fn find_deposit(&self, id: i32) -> Result<Option<Deposit>> {
        debug!("Finding deposit by ID: {}", id);

        let model = entities::Deposit::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(Deposit::from))
    }

    /// Insert a deposit and return the stored row
    pub async fn create_deposit(&self, new: &NewDeposit) -> Result<Deposit> {
        debug!("Creating deposit: {}", new.name);

        let model = deposit::Model::from_new_deposit(new)
            .insert(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.into())
    }

    /// Apply changes to a deposit; `None` when it does not exist
    pub async fn update_deposit(
        &self,
        id: i32,
        changes: &DepositChanges,
    ) -> Result<Option<Deposit>> {
        let Some(model) = entities::Deposit::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?
        else {
            return Ok(None);
        };

        let mut active: deposit::ActiveModel = model.into();
        if let Some(name) = &changes.name {
            active.name = Set(name.clone());
        }
        if let Some(v) = changes.mineral_type_id {
            active.mineral_type_id = Set(Some(v));
        }
        if let Some(v) = changes.ore_type_id {
            active.ore_type_id = Set(Some(v));
        }
        if let Some(v) = &changes.location_name {
            active.location_name = Set(Some(v.clone()));
        }
        if let Some(v) = changes.latitude {
            active.latitude = Set(v);
        }
        if let Some(v) = changes.longitude {
            active.longitude = Set(v);
        }
        if let Some(v) = &changes.country {
            active.country = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.region {
            active.region = Set(Some(v.clone()));
        }
        if let Some(v) = changes.estimated_reserves_tonnes {
            active.estimated_reserves_tonnes = Set(Some(v));
        }
        if let Some(v) = changes.average_grade {
            active.average_grade = Set(Some(v));
        }
        if let Some(v) = &changes.confidence_level {
            active.confidence_level = Set(Some(v.clone()));
        }
        if let Some(v) = changes.discovery_year {
            active.discovery_year = Set(Some(v));
        }
        if let Some(v) = &changes.status {
            active.status = Set(v.clone());
        }
        if let Some(v) = &changes.notes {
            active.notes = Set(Some(v.clone()));
        }

        let model = active
            .update(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(Some(model.into()))
    }

    /// Delete a deposit together with the claims filed on it
    pub async fn delete_deposit(&self, id: i32) -> Result<bool> {
        entities::MiningClaim::delete_many()
            .filter(mining_claim::Column::DepositId.eq(id))
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        let result = entities::Deposit::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(result.rows_affected > 0)
    }

    /// Delete every deposit; claims go first since they may reference deposits
    pub async fn clear_deposits(&self) -> Result<u64> {
        let claims = self.clear_claims().await?;
        let result = entities::Deposit::delete_many()
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        info!(
            "Cleared {} deposits and {} claims",
            result.rows_affected, claims
        );
        Ok(result.rows_affected)
    }

    /// Most recent deposits created by a user
    pub async fn recent_deposits_by(&self, user_id: Uuid, limit: u64) -> Result<Vec<Deposit>> {
        let models = entities::Deposit::find()
            .filter(deposit::Column::CreatedBy.eq(user_id))
            .order_by_desc(deposit::Column::CreatedAt)
            .order_by_desc(deposit::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.into_iter().map(Deposit::from).collect())
    }

    /// Whether a deposit with exactly this name and position exists
    pub async fn deposit_exists_at(&self, name: &str, latitude: f64, longitude: f64) -> Result<bool> {
        let count = entities::Deposit::find()
            .filter(deposit::Column::Name.eq(name))
            .filter(deposit::Column::Latitude.eq(latitude))
            .filter(deposit::Column::Longitude.eq(longitude))
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(count > 0)
    }
}
