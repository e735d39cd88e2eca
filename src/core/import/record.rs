use async_trait::async_trait;

use super::fields::{FieldAliases, FieldSource, InvalidValue, LogicalField};
use super::pipeline::ImportStore;
use super::summary::ImportTarget;
use crate::core::models::claim::{DEFAULT_CLAIM_STATUS, DEFAULT_CLAIM_TYPE};
use crate::core::models::deposit::DEFAULT_DEPOSIT_STATUS;
use crate::core::models::{NewClaim, NewDeposit};
use crate::utils::error::Result;
use crate::utils::validation::is_valid_coordinate;

/// Name given to deposits without one
pub const UNKNOWN_DEPOSIT_NAME: &str = "Unknown Deposit";
/// Confidence level of deposits without one
pub const UNKNOWN_CONFIDENCE: &str = "Unknown";

/// A WGS84 point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// `None` for non-finite or out-of-range coordinates
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        is_valid_coordinate(latitude, longitude).then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// Usable rows of a parsed file plus the number of rows dropped as invalid
#[derive(Debug)]
pub struct ParsedBatch<R> {
    pub rows: Vec<R>,
    pub skipped: usize,
}

impl<R> Default for ParsedBatch<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            skipped: 0,
        }
    }
}

/// A record kind the pipeline can build from a source row and merge into the store
#[async_trait]
pub trait ImportRecord: Sized + Send + Sync {
    const TARGET: ImportTarget;

    /// Build a record; `ordinal` is the number of usable rows parsed before this one
    fn from_fields<S: FieldSource + ?Sized>(
        fields: &FieldAliases<'_, S>,
        position: Position,
        ordinal: usize,
    ) -> std::result::Result<Self, InvalidValue>;

    /// Whether the store already holds a record with the same natural key
    async fn is_duplicate(&self, store: &dyn ImportStore) -> Result<bool>;

    async fn insert(&self, store: &dyn ImportStore) -> Result<()>;
}

#[async_trait]
impl ImportRecord for NewDeposit {
    const TARGET: ImportTarget = ImportTarget::Deposits;

    fn from_fields<S: FieldSource + ?Sized>(
        fields: &FieldAliases<'_, S>,
        position: Position,
        _ordinal: usize,
    ) -> std::result::Result<Self, InvalidValue> {
        Ok(NewDeposit {
            name: fields.text_or(LogicalField::Name, UNKNOWN_DEPOSIT_NAME),
            mineral_type_id: None,
            ore_type_id: None,
            location_name: fields.text(LogicalField::Location),
            latitude: position.latitude,
            longitude: position.longitude,
            country: fields.text(LogicalField::Country),
            region: fields.text(LogicalField::Region),
            estimated_reserves_tonnes: fields.number(LogicalField::Reserves)?,
            average_grade: fields.number(LogicalField::Grade)?,
            confidence_level: Some(fields.text_or(LogicalField::Confidence, UNKNOWN_CONFIDENCE)),
            discovery_year: fields.number(LogicalField::Year)?,
            status: fields.text_or(LogicalField::Status, DEFAULT_DEPOSIT_STATUS),
            notes: fields.text(LogicalField::Notes),
            created_by: None,
        })
    }

    async fn is_duplicate(&self, store: &dyn ImportStore) -> Result<bool> {
        store
            .deposit_exists(&self.name, self.latitude, self.longitude)
            .await
    }

    async fn insert(&self, store: &dyn ImportStore) -> Result<()> {
        store.insert_deposit(self).await
    }
}

#[async_trait]
impl ImportRecord for NewClaim {
    const TARGET: ImportTarget = ImportTarget::Claims;

    fn from_fields<S: FieldSource + ?Sized>(
        fields: &FieldAliases<'_, S>,
        position: Position,
        ordinal: usize,
    ) -> std::result::Result<Self, InvalidValue> {
        Ok(NewClaim {
            claim_id: fields
                .text(LogicalField::ClaimId)
                .unwrap_or_else(|| format!("CLM-{}", ordinal)),
            deposit_id: None,
            owner_id: None,
            company_name: fields.text(LogicalField::Company),
            location_description: fields.text(LogicalField::Location),
            area_hectares: fields.number(LogicalField::Area)?,
            claim_type: fields.text_or(LogicalField::ClaimType, DEFAULT_CLAIM_TYPE),
            issue_date: None,
            expiry_date: None,
            status: fields.text_or(LogicalField::Status, DEFAULT_CLAIM_STATUS),
            latitude: Some(position.latitude),
            longitude: Some(position.longitude),
        })
    }

    async fn is_duplicate(&self, store: &dyn ImportStore) -> Result<bool> {
        store.claim_exists(&self.claim_id).await
    }

    async fn insert(&self, store: &dyn ImportStore) -> Result<()> {
        store.insert_claim(self).await
    }
}
