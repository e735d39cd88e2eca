//! The static role table

use super::types::{Permission, PermissionSet, RoleDefinition};
use crate::core::models::UserRole;

use Permission::*;

const VIEWER: &[Permission] = &[ViewMinerals, ViewDeposits, ViewSsOverview, Search, ViewMaps];

const GEOLOGIST: &[Permission] = &[
    ViewMinerals,
    ViewDeposits,
    AddDeposits,
    EditDeposits,
    AddAssayResults,
    AddDrillingLogs,
    AddReports,
    EditOwnReports,
    ViewSsOverview,
    Search,
    ViewMaps,
    CreateWatchlist,
];

const EXPLORER: &[Permission] = &[
    ViewMinerals,
    ViewDeposits,
    ViewClaims,
    AddClaims,
    EditOwnClaims,
    ViewLicenses,
    ApplyLicenses,
    ViewSsOverview,
    Search,
    ViewMaps,
    CreateWatchlist,
    ViewRegulations,
];

const INVESTOR: &[Permission] = &[
    ViewMinerals,
    ViewDeposits,
    ViewClaims,
    ViewReports,
    ViewPrices,
    ViewSsOverview,
    Search,
    ViewMaps,
    CreateWatchlist,
    ViewAnalytics,
];

/// Build the definition of a single role
pub(super) fn definition_for(role: UserRole) -> RoleDefinition {
    let (name, description, permissions) = match role {
        UserRole::Viewer => (
            "Viewer",
            "Public viewer - read-only access to published data",
            PermissionSet::only(VIEWER.iter().copied()),
        ),
        UserRole::Geologist => (
            "Geologist",
            "Technical expert - can view and input geological data",
            PermissionSet::only(GEOLOGIST.iter().copied()),
        ),
        UserRole::Explorer => (
            "Explorer/Miner",
            "Mining company - can manage claims and exploration projects",
            PermissionSet::only(EXPLORER.iter().copied()),
        ),
        UserRole::Investor => (
            "Investor",
            "Financial stakeholder - can view deposits and market data",
            PermissionSet::only(INVESTOR.iter().copied()),
        ),
        UserRole::Admin => (
            "Administrator",
            "System administrator - full access and control",
            PermissionSet::All,
        ),
    };

    RoleDefinition {
        role,
        name: name.to_string(),
        description: description.to_string(),
        permissions,
    }
}
