//! Tests for RBAC functionality

use crate::auth::rbac::RbacSystem;
use crate::auth::rbac::types::{Permission, PermissionSet};
use crate::config::RbacConfig;
use crate::core::models::{User, UserRole};
use std::collections::HashSet;
use std::str::FromStr;

fn create_test_rbac() -> RbacSystem {
    RbacSystem::new(&RbacConfig::default())
}

fn user_with_stored_role(role: &str) -> User {
    let mut user = User::new(
        "nyandeng".to_string(),
        "hash".to_string(),
        UserRole::Viewer,
        None,
        None,
    );
    user.role = role.to_string();
    user
}

fn tokens_of(rbac: &RbacSystem, role: UserRole) -> HashSet<&'static str> {
    rbac.permissions_for(role).tokens().into_iter().collect()
}

#[test]
fn test_role_table_matches_published_tokens() {
    let rbac = create_test_rbac();

    let viewer: HashSet<_> = ["view_minerals", "view_deposits", "view_ss_overview", "search", "view_maps"]
        .into_iter()
        .collect();
    assert_eq!(tokens_of(&rbac, UserRole::Viewer), viewer);

    let geologist = tokens_of(&rbac, UserRole::Geologist);
    assert_eq!(geologist.len(), 12);
    assert!(geologist.contains("add_deposits"));
    assert!(geologist.contains("edit_own_reports"));
    assert!(!geologist.contains("add_claims"));

    let explorer = tokens_of(&rbac, UserRole::Explorer);
    assert_eq!(explorer.len(), 12);
    assert!(explorer.contains("add_claims"));
    assert!(explorer.contains("view_regulations"));
    assert!(!explorer.contains("add_deposits"));

    let investor = tokens_of(&rbac, UserRole::Investor);
    assert_eq!(investor.len(), 10);
    assert!(investor.contains("view_analytics"));
    assert!(!investor.contains("add_claims"));

    assert_eq!(rbac.permissions_for(UserRole::Admin), &PermissionSet::All);
    assert_eq!(rbac.permissions_for(UserRole::Admin).tokens(), vec!["*"]);
}

#[test]
fn test_has_permission_iff_in_set_or_admin() {
    let rbac = create_test_rbac();

    for role in UserRole::ALL {
        let tokens = tokens_of(&rbac, role);
        for permission in Permission::ALL {
            let expected = role == UserRole::Admin || tokens.contains(permission.as_str());
            assert_eq!(
                rbac.has_permission(role, permission),
                expected,
                "{} / {}",
                role,
                permission
            );
            assert_eq!(rbac.has_permission_token(role, permission.as_str()), expected);
        }
    }
}

#[test]
fn test_unknown_tokens_only_granted_by_wildcard() {
    let rbac = create_test_rbac();
    for role in UserRole::ALL {
        let granted = rbac.has_permission_token(role, "launch_rockets");
        assert_eq!(granted, role == UserRole::Admin);
    }
    assert!(!rbac.has_permission_token(UserRole::Viewer, ""));
    assert!(!rbac.has_permission_token(UserRole::Viewer, "VIEW_MINERALS"));
}

#[test]
fn test_no_identity_resolves_to_viewer() {
    let rbac = create_test_rbac();
    assert_eq!(rbac.resolve_role(None), UserRole::Viewer);

    let ctx = rbac.context_for(None);
    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.role(), UserRole::Viewer);
    assert!(ctx.has_permission(Permission::ViewMaps));
    assert!(!ctx.has_permission(Permission::AddDeposits));
}

#[test]
fn test_unrecognized_stored_role_falls_back_to_viewer() {
    let rbac = create_test_rbac();

    for stored in ["", "Admin", "superuser", "geologist "] {
        let user = user_with_stored_role(stored);
        assert_eq!(rbac.resolve_role(Some(&user)), UserRole::Viewer, "{:?}", stored);
        // The stored value is left untouched
        assert_eq!(user.role, stored);
    }

    assert_eq!(rbac.resolve_stored_role(None), UserRole::Viewer);
    assert_eq!(rbac.resolve_stored_role(Some("explorer")), UserRole::Explorer);
}

#[test]
fn test_admin_subsumes_role_predicates_but_not_is_admin() {
    let rbac = create_test_rbac();

    let admin = rbac.context_for(Some(&user_with_stored_role("admin")));
    assert!(admin.is_admin());
    assert!(admin.is_geologist());
    assert!(admin.is_explorer());
    assert!(admin.is_investor());

    let geologist = rbac.context_for(Some(&user_with_stored_role("geologist")));
    assert!(!geologist.is_admin());
    assert!(geologist.is_geologist());
    assert!(!geologist.is_explorer());
    assert!(!geologist.is_investor());
    assert!(geologist.is_role(UserRole::Geologist));
    assert!(!geologist.is_role(UserRole::Admin));
}

#[test]
fn test_require_helpers_distinguish_login_from_permission() {
    use crate::utils::error::GatewayError;
    let rbac = create_test_rbac();

    let anonymous = rbac.context_for(None);
    assert!(matches!(anonymous.require_login(), Err(GatewayError::Auth(_))));
    assert!(matches!(
        anonymous.require_permission(Permission::AddDeposits),
        Err(GatewayError::Auth(_))
    ));
    assert!(anonymous.require_permission(Permission::ViewMinerals).is_ok());

    let investor = rbac.context_for(Some(&user_with_stored_role("investor")));
    assert!(matches!(
        investor.require_permission(Permission::AddDeposits),
        Err(GatewayError::Forbidden(_))
    ));
    assert!(matches!(investor.require_admin(), Err(GatewayError::Forbidden(_))));
    assert!(investor.require_role(UserRole::Investor).is_ok());
}

#[test]
fn test_list_roles_in_display_order() {
    let rbac = create_test_rbac();
    let roles: Vec<UserRole> = rbac.list_roles().iter().map(|d| d.role).collect();
    assert_eq!(roles, UserRole::ALL.to_vec());
    assert_eq!(rbac.get_role(UserRole::Explorer).name, "Explorer/Miner");
}

#[test]
fn test_permission_tokens_roundtrip() {
    for permission in Permission::ALL {
        assert_eq!(Permission::from_str(permission.as_str()).unwrap(), permission);
    }
    let unique: HashSet<_> = Permission::ALL.iter().map(|p| p.as_str()).collect();
    assert_eq!(unique.len(), Permission::ALL.len());
}

#[test]
fn test_registration_role_uses_config() {
    let rbac = create_test_rbac();
    assert_eq!(rbac.registration_role(Some("explorer")), UserRole::Explorer);
    assert_eq!(rbac.registration_role(Some("admin")), UserRole::Viewer);
}
