use sea_orm::DatabaseConnection;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Row counts shown on the geospatial admin page
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct DatabaseStats {
    pub deposits: u64,
    pub claims: u64,
}

/// Deposit counts by lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DepositStatusSummary {
    pub total: u64,
    pub active: u64,
    pub prospect: u64,
    pub historical: u64,
}

/// Claim counts by tenure status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ClaimStatusSummary {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    pub expired: u64,
}
