//! Imports merged into the database

use crate::common::TestDatabase;
use crate::common::fixtures::{CLAIMS_WITHOUT_IDS_CSV, MIXED_GEOJSON, create_user};
use georesource_explorer::GatewayError;
use georesource_explorer::config::ImportConfig;
use georesource_explorer::core::import::{DepositImportOptions, ImportFile, Importer};
use georesource_explorer::core::models::{DepositFilter, UserRole};

#[tokio::test]
async fn test_geojson_import_is_idempotent() {
    let db = TestDatabase::new().await;
    let config = ImportConfig::default();
    let importer = Importer::new(db.db(), &config);
    let file = ImportFile::new("deposits.geojson", MIXED_GEOJSON);
    let options = DepositImportOptions::from_config(&config, None);

    let first = importer.import_deposits(&file, options).await.unwrap();
    assert_eq!((first.inserted, first.duplicates, first.total), (3, 0, 3));

    let second = importer.import_deposits(&file, options).await.unwrap();
    assert_eq!((second.inserted, second.duplicates, second.total), (0, 3, 3));

    let stats = db.db().stats().await.unwrap();
    assert_eq!(stats.deposits, 3);
}

#[tokio::test]
async fn test_imported_deposit_fields() {
    let db = TestDatabase::new().await;
    let config = ImportConfig::default();
    let admin = create_user(db.db(), "root", UserRole::Admin).await;
    let importer = Importer::new(db.db(), &config);

    importer
        .import_deposits(
            &ImportFile::new("deposits.json", MIXED_GEOJSON),
            DepositImportOptions::from_config(&config, Some(admin.id)),
        )
        .await
        .unwrap();

    let deposits = db.db().list_deposits(&DepositFilter::default()).await.unwrap();
    let olympic = deposits.iter().find(|d| d.name == "Olympic Dam").unwrap();
    assert_eq!(olympic.latitude, -30.44);
    assert_eq!(olympic.longitude, 136.88);
    assert_eq!(olympic.estimated_reserves_tonnes, Some(8_400_000_000.0));
    assert_eq!(olympic.average_grade, None);
    assert_eq!(olympic.mineral_type_id, Some(1));
    assert_eq!(olympic.created_by, Some(admin.id));
    assert_eq!(olympic.status, "Prospect");

    let whaleback = deposits.iter().find(|d| d.name == "Mount Whaleback").unwrap();
    assert_eq!(whaleback.discovery_year, Some(1957));
    assert!(deposits.iter().all(|d| d.name != "Haul Road"));
}

#[tokio::test]
async fn test_csv_zero_coordinates_are_skipped() {
    let db = TestDatabase::new().await;
    let config = ImportConfig::default();
    let importer = Importer::new(db.db(), &config);
    let csv = "name,latitude,longitude\nNowhere,0,0\nKalgoorlie,-30.75,121.47\n";

    let summary = importer
        .import_deposits(
            &ImportFile::new("deposits.csv", csv),
            DepositImportOptions::from_config(&config, None),
        )
        .await
        .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total, 1);
    assert!(!db.db().deposit_exists_at("Nowhere", 0.0, 0.0).await.unwrap());
}

#[tokio::test]
async fn test_claims_without_ids_get_generated_ids() {
    let db = TestDatabase::new().await;
    let config = ImportConfig::default();
    let importer = Importer::new(db.db(), &config);

    let summary = importer
        .import_claims(&ImportFile::new("claims.csv", CLAIMS_WITHOUT_IDS_CSV))
        .await
        .unwrap();
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.message(), "Imported 2 claims");

    let first = db.db().find_claim_by_claim_id("CLM-0").await.unwrap().unwrap();
    assert_eq!(first.company_name.as_deref(), Some("Acme Mining"));
    assert_eq!(first.area_hectares, Some(120.5));
    assert_eq!(first.owner_id, None);

    let second = db.db().find_claim_by_claim_id("CLM-1").await.unwrap().unwrap();
    assert_eq!(second.area_hectares, None);
    assert_eq!(second.claim_type, "Exploration");
}

#[tokio::test]
async fn test_claim_dedup_on_claim_id() {
    let db = TestDatabase::new().await;
    let config = ImportConfig::default();
    let importer = Importer::new(db.db(), &config);
    let csv = "claim_id,company,lat,lng\nWA-001,Acme,-31.9,115.8\nWA-001,Acme,-31.9,115.8\n";

    let summary = importer
        .import_claims(&ImportFile::new("claims.csv", csv))
        .await
        .unwrap();
    assert_eq!((summary.inserted, summary.duplicates), (1, 1));
}

#[tokio::test]
async fn test_unknown_mineral_type_writes_nothing() {
    let db = TestDatabase::new().await;
    let config = ImportConfig::default();
    let importer = Importer::new(db.db(), &config);
    let options = DepositImportOptions {
        mineral_type_id: 42,
        ..DepositImportOptions::from_config(&config, None)
    };

    let err = importer
        .import_deposits(&ImportFile::new("deposits.geojson", MIXED_GEOJSON), options)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
    assert_eq!(db.db().stats().await.unwrap().deposits, 0);
}

#[tokio::test]
async fn test_malformed_geojson_is_a_client_error() {
    let db = TestDatabase::new().await;
    let config = ImportConfig::default();
    let importer = Importer::new(db.db(), &config);

    let err = importer
        .import_deposits(
            &ImportFile::new("broken.geojson", "{not json"),
            DepositImportOptions::from_config(&config, None),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Import(_)));
    assert!(err.is_client_error());
}
