use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_user_sessions_table;
mod m20240101_000003_create_classification_tables;
mod m20240101_000004_create_deposits_table;
mod m20240101_000005_create_mining_claims_table;
mod m20240101_000006_create_reference_tables;
mod m20240101_000007_create_geological_reports_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_user_sessions_table::Migration),
            Box::new(m20240101_000003_create_classification_tables::Migration),
            Box::new(m20240101_000004_create_deposits_table::Migration),
            Box::new(m20240101_000005_create_mining_claims_table::Migration),
            Box::new(m20240101_000006_create_reference_tables::Migration),
            Box::new(m20240101_000007_create_geological_reports_table::Migration),
        ]
    }
}
