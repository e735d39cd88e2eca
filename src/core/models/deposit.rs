//! Mineral deposits

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default status of a deposit without one
pub const DEFAULT_DEPOSIT_STATUS: &str = "Prospect";

/// A geological deposit record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deposit {
    pub id: i32,
    pub name: String,
    pub mineral_type_id: Option<i32>,
    pub ore_type_id: Option<i32>,
    pub location_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub region: Option<String>,
    pub estimated_reserves_tonnes: Option<f64>,
    pub average_grade: Option<f64>,
    pub confidence_level: Option<String>,
    pub discovery_year: Option<i32>,
    pub status: String,
    pub notes: Option<String>,
    /// User who inserted the record
    pub created_by: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields of a deposit about to be inserted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDeposit {
    pub name: String,
    pub mineral_type_id: Option<i32>,
    pub ore_type_id: Option<i32>,
    pub location_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub region: Option<String>,
    pub estimated_reserves_tonnes: Option<f64>,
    pub average_grade: Option<f64>,
    pub confidence_level: Option<String>,
    pub discovery_year: Option<i32>,
    #[serde(default = "default_status")]
    pub status: String,
    pub notes: Option<String>,
    #[serde(skip_deserializing)]
    pub created_by: Option<Uuid>,
}

/// Partial update of a deposit; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepositChanges {
    pub name: Option<String>,
    pub mineral_type_id: Option<i32>,
    pub ore_type_id: Option<i32>,
    pub location_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub estimated_reserves_tonnes: Option<f64>,
    pub average_grade: Option<f64>,
    pub confidence_level: Option<String>,
    pub discovery_year: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Browse filters for deposits
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepositFilter {
    /// Substring of name or location
    pub q: Option<String>,
    /// Mineral type id
    #[serde(alias = "mineral_id")]
    pub mineral: Option<i32>,
    pub country: Option<String>,
    pub status: Option<String>,
}

/// Deposit as drawn on the map, joined with its mineral type name
#[derive(Debug, Clone, Serialize)]
pub struct DepositMapPoint {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region: Option<String>,
    pub mineral: Option<String>,
    pub status: String,
    pub estimated_reserves_tonnes: Option<f64>,
    pub average_grade: Option<f64>,
    pub confidence_level: Option<String>,
}

/// Map layer filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapFilter {
    pub mineral_id: Option<i32>,
    pub status: Option<String>,
}

fn default_status() -> String {
    DEFAULT_DEPOSIT_STATUS.to_string()
}
