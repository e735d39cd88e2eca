//! Ownership guards against stored records

use crate::common::TestDatabase;
use crate::common::fixtures::{app_state, create_user, new_claim, new_deposit};
use georesource_explorer::auth::{RecordKind, can_edit};
use georesource_explorer::core::models::UserRole;

#[tokio::test]
async fn test_deposit_guard_requires_role_and_ownership() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let rbac = state.auth.rbac();

    let owner = create_user(db.db(), "owner", UserRole::Geologist).await;
    let other = create_user(db.db(), "other", UserRole::Geologist).await;
    let explorer = create_user(db.db(), "explorer", UserRole::Explorer).await;

    let own = db
        .db()
        .create_deposit(&new_deposit("Olympic Dam", -30.44, 136.88, Some(owner.id)))
        .await
        .unwrap();
    let explorers = db
        .db()
        .create_deposit(&new_deposit("Prominent Hill", -29.7, 135.5, Some(explorer.id)))
        .await
        .unwrap();

    let owner_ctx = rbac.context_for(Some(&owner));
    let other_ctx = rbac.context_for(Some(&other));
    let explorer_ctx = rbac.context_for(Some(&explorer));

    assert!(can_edit(db.db(), &owner_ctx, RecordKind::Deposit, own.id).await.unwrap());
    // right role, wrong owner
    assert!(!can_edit(db.db(), &other_ctx, RecordKind::Deposit, own.id).await.unwrap());
    // right owner, wrong role
    assert!(!can_edit(db.db(), &explorer_ctx, RecordKind::Deposit, explorers.id).await.unwrap());
}

#[tokio::test]
async fn test_claim_guard_requires_role_and_ownership() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let rbac = state.auth.rbac();

    let owner = create_user(db.db(), "owner", UserRole::Explorer).await;
    let other = create_user(db.db(), "other", UserRole::Explorer).await;

    let claim = db
        .db()
        .create_claim(&new_claim("WA-001", None, Some(owner.id)))
        .await
        .unwrap();
    let imported = db
        .db()
        .create_claim(&new_claim("WA-002", None, None))
        .await
        .unwrap();

    let owner_ctx = rbac.context_for(Some(&owner));
    let other_ctx = rbac.context_for(Some(&other));

    assert!(can_edit(db.db(), &owner_ctx, RecordKind::Claim, claim.id).await.unwrap());
    assert!(!can_edit(db.db(), &other_ctx, RecordKind::Claim, claim.id).await.unwrap());
    assert!(!can_edit(db.db(), &owner_ctx, RecordKind::Claim, imported.id).await.unwrap());
}

#[tokio::test]
async fn test_guard_on_missing_record() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let rbac = state.auth.rbac();

    let geologist = create_user(db.db(), "geo", UserRole::Geologist).await;
    let admin = create_user(db.db(), "root", UserRole::Admin).await;

    let geologist_ctx = rbac.context_for(Some(&geologist));
    let admin_ctx = rbac.context_for(Some(&admin));
    let anonymous = rbac.context_for(None);

    assert!(!can_edit(db.db(), &geologist_ctx, RecordKind::Deposit, 999).await.unwrap());
    assert!(!can_edit(db.db(), &anonymous, RecordKind::Deposit, 999).await.unwrap());
    assert!(can_edit(db.db(), &admin_ctx, RecordKind::Deposit, 999).await.unwrap());
    assert!(can_edit(db.db(), &admin_ctx, RecordKind::Claim, 999).await.unwrap());
}
