//! Ownership checks for editing individual records

use super::context::AuthContext;
use crate::core::models::UserRole;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Kinds of records that carry an owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Owned through `deposits.created_by`
    Deposit,
    /// Owned through `mining_claims.owner_id`
    Claim,
}

impl RecordKind {
    /// Role a non-admin owner must hold to edit this kind of record
    pub fn owning_role(&self) -> UserRole {
        match self {
            RecordKind::Deposit => UserRole::Geologist,
            RecordKind::Claim => UserRole::Explorer,
        }
    }
}

/// Ownership of a record as seen by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// No record with that id
    Missing,
    /// The record exists; owner may be unset for imported or seeded rows
    Owned(Option<Uuid>),
}

/// Source of record ownership
#[async_trait]
pub trait OwnershipLookup: Send + Sync {
    async fn ownership(&self, kind: RecordKind, record_id: i32) -> Result<Ownership>;
}

/// Decision for a record whose ownership is already known.
///
/// Admins pass. Everyone else needs the owning role AND to be the owner.
pub fn may_edit(ctx: &AuthContext, kind: RecordKind, ownership: Ownership) -> bool {
    if ctx.is_admin() {
        return true;
    }

    let Some(user_id) = ctx.user_id() else {
        return false;
    };

    match ownership {
        Ownership::Missing => false,
        Ownership::Owned(owner) => ctx.role() == kind.owning_role() && owner == Some(user_id),
    }
}

/// Whether the caller may edit or delete the record
pub async fn can_edit<L>(
    lookup: &L,
    ctx: &AuthContext,
    kind: RecordKind,
    record_id: i32,
) -> Result<bool>
where
    L: OwnershipLookup + ?Sized,
{
    if ctx.is_admin() {
        return Ok(true);
    }
    if !ctx.is_authenticated() {
        return Ok(false);
    }

    let ownership = lookup.ownership(kind, record_id).await?;
    let allowed = may_edit(ctx, kind, ownership);
    debug!(
        ?kind,
        record_id,
        user_id = ?ctx.user_id(),
        allowed,
        "Evaluated edit guard"
    );
    Ok(allowed)
}
