//! RBAC data structures

use crate::core::models::UserRole;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// A single capability a role can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewMinerals,
    ViewDeposits,
    AddDeposits,
    EditDeposits,
    AddAssayResults,
    AddDrillingLogs,
    AddReports,
    EditOwnReports,
    ViewReports,
    ViewClaims,
    AddClaims,
    EditOwnClaims,
    ViewLicenses,
    ApplyLicenses,
    ViewRegulations,
    ViewPrices,
    ViewAnalytics,
    ViewSsOverview,
    Search,
    ViewMaps,
    CreateWatchlist,
}

impl Permission {
    /// Every known capability
    pub const ALL: [Permission; 21] = [
        Permission::ViewMinerals,
        Permission::ViewDeposits,
        Permission::AddDeposits,
        Permission::EditDeposits,
        Permission::AddAssayResults,
        Permission::AddDrillingLogs,
        Permission::AddReports,
        Permission::EditOwnReports,
        Permission::ViewReports,
        Permission::ViewClaims,
        Permission::AddClaims,
        Permission::EditOwnClaims,
        Permission::ViewLicenses,
        Permission::ApplyLicenses,
        Permission::ViewRegulations,
        Permission::ViewPrices,
        Permission::ViewAnalytics,
        Permission::ViewSsOverview,
        Permission::Search,
        Permission::ViewMaps,
        Permission::CreateWatchlist,
    ];

    /// Token used in the role table and in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewMinerals => "view_minerals",
            Permission::ViewDeposits => "view_deposits",
            Permission::AddDeposits => "add_deposits",
            Permission::EditDeposits => "edit_deposits",
            Permission::AddAssayResults => "add_assay_results",
            Permission::AddDrillingLogs => "add_drilling_logs",
            Permission::AddReports => "add_reports",
            Permission::EditOwnReports => "edit_own_reports",
            Permission::ViewReports => "view_reports",
            Permission::ViewClaims => "view_claims",
            Permission::AddClaims => "add_claims",
            Permission::EditOwnClaims => "edit_own_claims",
            Permission::ViewLicenses => "view_licenses",
            Permission::ApplyLicenses => "apply_licenses",
            Permission::ViewRegulations => "view_regulations",
            Permission::ViewPrices => "view_prices",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ViewSsOverview => "view_ss_overview",
            Permission::Search => "search",
            Permission::ViewMaps => "view_maps",
            Permission::CreateWatchlist => "create_watchlist",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown permission: {}", s))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Capabilities granted to a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSet {
    /// Wildcard: every capability, including ones added later
    All,
    /// Exactly the listed capabilities
    Only(HashSet<Permission>),
}

impl PermissionSet {
    /// Wildcard token as it appears in the role table
    pub const WILDCARD: &'static str = "*";

    pub fn only<I: IntoIterator<Item = Permission>>(permissions: I) -> Self {
        PermissionSet::Only(permissions.into_iter().collect())
    }

    pub fn contains(&self, permission: Permission) -> bool {
        match self {
            PermissionSet::All => true,
            PermissionSet::Only(set) => set.contains(&permission),
        }
    }

    /// Token check; unknown tokens are only granted by the wildcard
    pub fn contains_token(&self, token: &str) -> bool {
        match self {
            PermissionSet::All => true,
            PermissionSet::Only(set) => token
                .parse::<Permission>()
                .map(|p| set.contains(&p))
                .unwrap_or(false),
        }
    }

    /// Sorted tokens, `["*"]` for the wildcard
    pub fn tokens(&self) -> Vec<&'static str> {
        match self {
            PermissionSet::All => vec![Self::WILDCARD],
            PermissionSet::Only(set) => {
                let mut tokens: Vec<&'static str> = set.iter().map(Permission::as_str).collect();
                tokens.sort_unstable();
                tokens
            }
        }
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tokens().serialize(serializer)
    }
}

/// One row of the role table
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    /// Role key
    pub role: UserRole,
    /// Human readable name
    pub name: String,
    /// What the role is for
    pub description: String,
    /// Granted capabilities
    pub permissions: PermissionSet,
}
