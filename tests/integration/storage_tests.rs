//! Storage operations behind the HTTP surface

use crate::common::TestDatabase;
use crate::common::fixtures::{create_user, new_claim, new_deposit};
use georesource_explorer::core::models::{
    ClaimChanges, ClaimFilter, DepositChanges, DepositFilter, MapFilter, UserRole,
};

#[tokio::test]
async fn test_deposit_lifecycle() {
    let db = TestDatabase::new().await;
    let geologist = create_user(db.db(), "geo", UserRole::Geologist).await;

    let deposit = db
        .db()
        .create_deposit(&new_deposit("Olympic Dam", -30.44, 136.88, Some(geologist.id)))
        .await
        .unwrap();
    assert!(db.db().deposit_exists_at("Olympic Dam", -30.44, 136.88).await.unwrap());
    assert!(!db.db().deposit_exists_at("Olympic Dam", -30.44, 136.89).await.unwrap());

    let changes = DepositChanges {
        status: Some("Producing".to_string()),
        average_grade: Some(1.2),
        ..DepositChanges::default()
    };
    let updated = db.db().update_deposit(deposit.id, &changes).await.unwrap().unwrap();
    assert_eq!(updated.status, "Producing");
    assert_eq!(updated.average_grade, Some(1.2));
    assert_eq!(updated.name, "Olympic Dam");

    assert!(db.db().update_deposit(999, &changes).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_deposit_removes_its_claims() {
    let db = TestDatabase::new().await;
    let deposit = db
        .db()
        .create_deposit(&new_deposit("Super Pit", -30.75, 121.47, None))
        .await
        .unwrap();
    db.db()
        .create_claim(&new_claim("WA-100", Some(deposit.id), None))
        .await
        .unwrap();
    db.db().create_claim(&new_claim("WA-101", None, None)).await.unwrap();

    assert!(db.db().delete_deposit(deposit.id).await.unwrap());
    assert!(db.db().find_deposit(deposit.id).await.unwrap().is_none());
    assert!(!db.db().claim_exists("WA-100").await.unwrap());
    assert!(db.db().claim_exists("WA-101").await.unwrap());
    assert!(!db.db().delete_deposit(deposit.id).await.unwrap());
}

#[tokio::test]
async fn test_filters_and_map_layers() {
    let db = TestDatabase::new().await;
    db.db()
        .create_deposit(&new_deposit("Zinc Hill", -20.0, 130.0, None))
        .await
        .unwrap();
    let mut producing = new_deposit("Argyle", -16.7, 128.4, None);
    producing.status = "Producing".to_string();
    db.db().create_deposit(&producing).await.unwrap();

    let filter = DepositFilter {
        status: Some("Producing".to_string()),
        ..DepositFilter::default()
    };
    let rows = db.db().list_deposits(&filter).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Argyle");

    let points = db.db().deposit_map_points(&MapFilter::default()).await.unwrap();
    let names: Vec<_> = points.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Argyle", "Zinc Hill"]);
    assert_eq!(points[0].mineral.as_deref(), Some("Unclassified"));

    let mut unplaced = new_claim("WA-200", None, None);
    unplaced.latitude = None;
    unplaced.longitude = None;
    db.db().create_claim(&unplaced).await.unwrap();
    db.db().create_claim(&new_claim("WA-201", None, None)).await.unwrap();

    let claim_points = db.db().claim_map_points(None).await.unwrap();
    assert_eq!(claim_points.len(), 1);
    assert_eq!(claim_points[0].claim_id, "WA-201");

    let searched = db
        .db()
        .list_claims(&ClaimFilter {
            q: Some("WA-20".to_string()),
            ..ClaimFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(searched.len(), 2);
}

#[tokio::test]
async fn test_update_claim_keeps_unset_fields() {
    let db = TestDatabase::new().await;
    let claim = db
        .db()
        .create_claim(&new_claim("WA-300", None, None))
        .await
        .unwrap();

    let changes = ClaimChanges {
        status: Some("Expired".to_string()),
        ..ClaimChanges::default()
    };
    let updated = db.db().update_claim(claim.id, &changes).await.unwrap().unwrap();
    assert_eq!(updated.status, "Expired");
    assert_eq!(updated.company_name.as_deref(), Some("Acme Mining"));
    assert_eq!(updated.claim_id, "WA-300");
}

#[tokio::test]
async fn test_recent_records_by_user() {
    let db = TestDatabase::new().await;
    let geologist = create_user(db.db(), "geo", UserRole::Geologist).await;

    for i in 0..7 {
        db.db()
            .create_deposit(&new_deposit(&format!("Deposit {}", i), -20.0, 120.0 + i as f64, Some(geologist.id)))
            .await
            .unwrap();
    }
    db.db()
        .create_deposit(&new_deposit("Someone else's", -21.0, 121.0, None))
        .await
        .unwrap();

    let recent = db.db().recent_deposits_by(geologist.id, 5).await.unwrap();
    assert_eq!(recent.len(), 5);
    assert!(recent.iter().all(|d| d.created_by == Some(geologist.id)));
}

#[tokio::test]
async fn test_user_round_trip_and_username_collision() {
    let db = TestDatabase::new().await;
    let stored = create_user(db.db(), "prospector", UserRole::Explorer).await;
    assert_eq!(stored.role, "explorer");

    let found = db
        .db()
        .find_user_by_username("prospector")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, stored.id);
    assert!(db.db().find_user_by_username("Prospector").await.unwrap().is_none());

    let clash = georesource_explorer::core::models::User::new(
        "prospector".to_string(),
        "not-a-real-hash".to_string(),
        UserRole::Viewer,
        None,
        None,
    );
    let err = db.db().create_user(&clash).await.unwrap_err();
    assert!(matches!(err, georesource_explorer::GatewayError::Conflict(_)));
}

#[tokio::test]
async fn test_delete_claim() {
    let db = TestDatabase::new().await;
    let claim = db
        .db()
        .create_claim(&new_claim("WA-42", None, None))
        .await
        .unwrap();

    assert!(db.db().delete_claim(claim.id).await.unwrap());
    assert!(!db.db().delete_claim(claim.id).await.unwrap());
    assert!(!db.db().claim_exists("WA-42").await.unwrap());
}
