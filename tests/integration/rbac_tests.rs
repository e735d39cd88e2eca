//! Role resolution through the authentication system

use crate::common::TestDatabase;
use crate::common::fixtures::{app_state, create_user};
use georesource_explorer::auth::{AuthMethod, Permission};
use georesource_explorer::core::models::{User, UserRole};

#[tokio::test]
async fn test_anonymous_request_resolves_to_viewer() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);

    let ctx = state.auth.resolve_context(&AuthMethod::None).await.unwrap();
    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.role(), UserRole::Viewer);
    assert!(ctx.has_permission(Permission::ViewMaps));
    assert!(!ctx.has_permission(Permission::AddDeposits));
}

#[tokio::test]
async fn test_unknown_stored_role_resolves_to_viewer() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);

    let mut user = User::new(
        "legacy".to_string(),
        "not-a-real-hash".to_string(),
        UserRole::Viewer,
        None,
        None,
    );
    user.role = "superuser".to_string();
    let user = db.db().create_user(&user).await.unwrap();

    let ctx = state.auth.rbac().context_for(Some(&user));
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.role(), UserRole::Viewer);
    assert!(!ctx.has_permission_token("add_deposits"));
}

#[tokio::test]
async fn test_session_token_resolves_stored_role() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let user = create_user(db.db(), "geo", UserRole::Geologist).await;

    let expires_at = chrono::Utc::now() + chrono::Duration::minutes(30);
    db.db()
        .create_session("live-token", user.id, expires_at, None)
        .await
        .unwrap();

    let ctx = state
        .auth
        .resolve_context(&AuthMethod::Session("live-token".to_string()))
        .await
        .unwrap();
    assert_eq!(ctx.user_id(), Some(user.id));
    assert_eq!(ctx.role(), UserRole::Geologist);
    assert!(ctx.has_permission(Permission::AddDeposits));
    assert!(!ctx.has_permission(Permission::AddClaims));
}

#[tokio::test]
async fn test_expired_session_is_anonymous() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let user = create_user(db.db(), "explorer", UserRole::Explorer).await;

    let expired = chrono::Utc::now() - chrono::Duration::minutes(1);
    db.db()
        .create_session("stale-token", user.id, expired, None)
        .await
        .unwrap();

    let ctx = state
        .auth
        .resolve_context(&AuthMethod::Session("stale-token".to_string()))
        .await
        .unwrap();
    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.role(), UserRole::Viewer);
    assert_eq!(db.db().find_session_user("stale-token").await.unwrap(), None);
}

#[tokio::test]
async fn test_invalid_bearer_token_is_anonymous() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);

    let ctx = state
        .auth
        .resolve_context(&AuthMethod::Jwt("not-a-jwt".to_string()))
        .await
        .unwrap();
    assert!(!ctx.is_authenticated());
}

#[tokio::test]
async fn test_admin_holds_every_token() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let admin = create_user(db.db(), "root", UserRole::Admin).await;

    let ctx = state.auth.rbac().context_for(Some(&admin));
    for permission in Permission::ALL {
        assert!(ctx.has_permission(permission), "admin lacks {}", permission);
    }
    assert!(ctx.has_permission_token("some_future_capability"));
}

#[tokio::test]
async fn test_valid_token_for_missing_user_resolves_to_viewer() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let token = state
        .auth
        .jwt()
        .create_access_token(uuid::Uuid::new_v4())
        .unwrap();

    let ctx = state
        .auth
        .resolve_context(&AuthMethod::Jwt(token))
        .await
        .unwrap();
    assert_eq!(ctx.user_id(), None);
    assert_eq!(ctx.role(), UserRole::Viewer);
    assert!(!ctx.has_permission(Permission::AddDeposits));
}
