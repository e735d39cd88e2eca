use crate::config::DatabaseConfig;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities::{self, deposit, mining_claim};
use super::super::migration::Migrator;
use super::types::{
    ClaimStatusSummary, DatabaseBackendType, DatabaseStats, DepositStatusSummary, SeaOrmDatabase,
};

impl SeaOrmDatabase {
    /// Connect to the configured database
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = if config.url.starts_with("sqlite") {
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        };

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // An in-memory SQLite database lives only as long as its connection
        if !config.url.contains(":memory:") {
            opt.idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(3600));
        }

        let db = Database::connect(opt)
            .await
            .map_err(GatewayError::Database)?;

        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            GatewayError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::MineralType::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Count deposits and claims
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let deposits = entities::Deposit::find()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        let claims = entities::MiningClaim::find()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(DatabaseStats { deposits, claims })
    }

    /// Deposits by status: Active, Prospect, Historical
    pub async fn deposit_status_summary(&self) -> Result<DepositStatusSummary> {
        Ok(DepositStatusSummary {
            total: self.count_deposits(None).await?,
            active: self.count_deposits(Some("Active")).await?,
            prospect: self.count_deposits(Some("Prospect")).await?,
            historical: self.count_deposits(Some("Historical")).await?,
        })
    }

    /// Claims by status: Active, Inactive, Expired
    pub async fn claim_status_summary(&self) -> Result<ClaimStatusSummary> {
        Ok(ClaimStatusSummary {
            total: self.count_claims(None).await?,
            active: self.count_claims(Some("Active")).await?,
            inactive: self.count_claims(Some("Inactive")).await?,
            expired: self.count_claims(Some("Expired")).await?,
        })
    }

    async fn count_deposits(&self, status: Option<&str>) -> Result<u64> {
        let mut query = entities::Deposit::find();
        if let Some(status) = status {
            query = query.filter(deposit::Column::Status.eq(status));
        }
        query.count(&self.db).await.map_err(GatewayError::Database)
    }

    async fn count_claims(&self, status: Option<&str>) -> Result<u64> {
        let mut query = entities::MiningClaim::find();
        if let Some(status) = status {
            query = query.filter(mining_claim::Column::Status.eq(status));
        }
        query.count(&self.db).await.map_err(GatewayError::Database)
    }
}
