//! Test fixtures and data factories

use actix_web::web;
use georesource_explorer::auth::AuthSystem;
use georesource_explorer::config::Config;
use georesource_explorer::core::models::{NewClaim, NewDeposit, User, UserRole};
use georesource_explorer::server::AppState;
use georesource_explorer::storage::database::Database;

use super::TestDatabase;

/// Password accepted by the strength rules
pub const STRONG_PASSWORD: &str = "Str0ng!Passw0rd";

/// Insert a user with the given role
///
/// The stored hash is a placeholder; use [`create_user_with_password`] for login tests.
pub async fn create_user(db: &Database, username: &str, role: UserRole) -> User {
    let user = User::new(
        username.to_string(),
        "not-a-real-hash".to_string(),
        role,
        None,
        None,
    );
    db.create_user(&user).await.expect("Failed to create user")
}

/// Insert a user whose password verifies
pub async fn create_user_with_password(
    db: &Database,
    username: &str,
    password: &str,
    role: UserRole,
) -> User {
    let hash = georesource_explorer::utils::auth::hash_password(password)
        .expect("Failed to hash password");
    let user = User::new(username.to_string(), hash, role, None, None);
    db.create_user(&user).await.expect("Failed to create user")
}

/// Deposit row with the seeded classification
pub fn new_deposit(name: &str, latitude: f64, longitude: f64, created_by: Option<uuid::Uuid>) -> NewDeposit {
    NewDeposit {
        name: name.to_string(),
        mineral_type_id: Some(1),
        ore_type_id: Some(1),
        location_name: None,
        latitude,
        longitude,
        country: Some("Australia".to_string()),
        region: None,
        estimated_reserves_tonnes: None,
        average_grade: None,
        confidence_level: Some("Unknown".to_string()),
        discovery_year: None,
        status: "Prospect".to_string(),
        notes: None,
        created_by,
    }
}

/// Claim row, optionally on a deposit
pub fn new_claim(claim_id: &str, deposit_id: Option<i32>, owner_id: Option<uuid::Uuid>) -> NewClaim {
    NewClaim {
        claim_id: claim_id.to_string(),
        deposit_id,
        owner_id,
        company_name: Some("Acme Mining".to_string()),
        location_description: None,
        area_hectares: Some(120.5),
        claim_type: "Exploration".to_string(),
        issue_date: None,
        expiry_date: None,
        status: "Active".to_string(),
        latitude: Some(-31.95),
        longitude: Some(115.86),
    }
}

/// Three point features and one line string
pub const MIXED_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [136.88, -30.44]},
     "properties": {"name": "Olympic Dam", "country": "Australia", "reserves": "8400000000"}},
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [121.47, -30.75]},
     "properties": {"NAME": "Super Pit", "GRADE": 1.9}},
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [118.6, -22.3]},
     "properties": {"Name": "Mount Whaleback", "year": 1957}},
    {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
     "properties": {"name": "Haul Road"}}
  ]
}"#;

/// Claims without a claim id column
pub const CLAIMS_WITHOUT_IDS_CSV: &str = "\
company,latitude,longitude,area
Acme Mining,-31.95,115.86,120.5
Borealis Ltd,-32.10,116.02,
";

/// Application state over the given test database
pub fn app_state(db: &TestDatabase) -> web::Data<AppState> {
    let config = Config::default();
    let storage = db.storage();
    let auth = AuthSystem::new(config.auth(), storage.clone());
    web::Data::new(AppState::new(config, auth, storage))
}

/// `Authorization` header carrying a bearer token for the user
pub fn bearer(state: &AppState, user: &User) -> (&'static str, String) {
    let token = state
        .auth
        .jwt()
        .create_access_token(user.id)
        .expect("Failed to create access token");
    ("Authorization", format!("Bearer {}", token))
}
