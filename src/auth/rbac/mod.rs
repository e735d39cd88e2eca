//! Role-based access control
//!
//! A static table maps each [`UserRole`](crate::core::models::UserRole) to a
//! [`PermissionSet`]; the [`RbacSystem`] resolves stored roles and answers
//! capability checks against that table.

mod roles;
mod system;
#[cfg(test)]
mod tests;
pub mod types;

pub use system::RbacSystem;
pub use types::{Permission, PermissionSet, RoleDefinition};
