//! Domain models
//!
//! Plain data types shared by storage, the import pipeline and the HTTP layer.

pub mod catalog;
pub mod claim;
pub mod deposit;
pub mod report;
pub mod user;

pub use catalog::{Lesson, LessonInput, Mineral, MineralInput, MineralType, OreType, Regulation};
pub use claim::{ClaimChanges, ClaimFilter, ClaimMapPoint, MiningClaim, NewClaim};
pub use deposit::{
    Deposit, DepositChanges, DepositFilter, DepositMapPoint, MapFilter, NewDeposit,
};
pub use report::{GeologicalReport, ReportAccess};
pub use user::{User, UserRole};
