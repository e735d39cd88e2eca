//! Authentication and authorization
//!
//! Identity comes from a server-side session or a bearer JWT. The role
//! resolver turns that identity into an [`AuthContext`] once per request and
//! the guards combine it with record ownership.

pub mod context;
pub mod guards;
pub mod jwt;
pub mod rbac;
pub mod system;
pub mod types;

pub use context::AuthContext;
pub use guards::{Ownership, OwnershipLookup, RecordKind, can_edit, may_edit};
pub use rbac::{Permission, PermissionSet, RbacSystem};
pub use system::AuthSystem;
pub use types::{AuthMethod, LoginOutcome, Registration};
