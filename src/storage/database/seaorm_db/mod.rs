// Module declarations
mod types;
mod connection;
mod user_ops;
mod session_ops;
mod deposit_ops;
mod claim_ops;
mod catalog_ops;
mod report_ops;
mod guard_ops;
mod import_ops;

// Re-export public types
pub use catalog_ops::{MINERALS_PER_PAGE, MineralPage};
pub use types::{
    ClaimStatusSummary, DatabaseBackendType, DatabaseStats, DepositStatusSummary, SeaOrmDatabase,
};
