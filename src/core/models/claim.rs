//! Mining claims

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default status of a claim without one
pub const DEFAULT_CLAIM_STATUS: &str = "Active";
/// Default type of a claim without one
pub const DEFAULT_CLAIM_TYPE: &str = "Exploration";

/// A mining claim; `claim_id` is the external unique key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MiningClaim {
    pub id: i32,
    pub claim_id: String,
    pub deposit_id: Option<i32>,
    /// User who filed the claim
    pub owner_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub location_description: Option<String>,
    pub area_hectares: Option<f64>,
    pub claim_type: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields of a claim about to be inserted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewClaim {
    pub claim_id: String,
    pub deposit_id: Option<i32>,
    #[serde(skip_deserializing)]
    pub owner_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub location_description: Option<String>,
    pub area_hectares: Option<f64>,
    #[serde(default = "default_claim_type")]
    pub claim_type: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    #[serde(default = "default_claim_status")]
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial update of a claim; the external claim id cannot change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimChanges {
    pub deposit_id: Option<i32>,
    pub company_name: Option<String>,
    pub location_description: Option<String>,
    pub area_hectares: Option<f64>,
    pub claim_type: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Browse filters for claims
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimFilter {
    /// Substring of claim id or company
    pub q: Option<String>,
    pub status: Option<String>,
}

/// Claim as drawn on the map; only claims with both coordinates are listed
#[derive(Debug, Clone, Serialize)]
pub struct ClaimMapPoint {
    pub id: i32,
    pub claim_id: String,
    pub company_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub area_hectares: Option<f64>,
    pub status: String,
    pub claim_type: String,
    pub deposit_name: Option<String>,
}

fn default_claim_type() -> String {
    DEFAULT_CLAIM_TYPE.to_string()
}

fn default_claim_status() -> String {
    DEFAULT_CLAIM_STATUS.to_string()
}
