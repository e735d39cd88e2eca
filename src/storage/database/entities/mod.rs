/// Deposit entity module
pub mod deposit;
/// Geological report entity module
pub mod geological_report;
/// Learning content entity module
pub mod learning_content;
/// Mineral reference entity module
pub mod mineral;
/// Mineral type classification entity module
pub mod mineral_type;
/// Mining claim entity module
pub mod mining_claim;
/// Ore type classification entity module
pub mod ore_type;
/// Regulation entity module
pub mod regulation;
/// User entity module
pub mod user;
/// User session entity module
pub mod user_session;

pub use deposit::Entity as Deposit;
pub use geological_report::Entity as GeologicalReport;
pub use learning_content::Entity as LearningContent;
pub use mineral::Entity as Mineral;
pub use mineral_type::Entity as MineralType;
pub use mining_claim::Entity as MiningClaim;
pub use ore_type::Entity as OreType;
pub use regulation::Entity as Regulation;
pub use user::Entity as User;
pub use user_session::Entity as UserSession;
