use crate::core::models::{Deposit, NewDeposit};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Deposit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deposits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Natural key for import de-duplication together with the coordinates
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
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mineral_type::Entity",
        from = "Column::MineralTypeId",
        to = "super::mineral_type::Column::Id"
    )]
    MineralType,

    #[sea_orm(has_many = "super::mining_claim::Entity")]
    MiningClaims,
}

impl Related<super::mineral_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MineralType.def()
    }
}

impl Related<super::mining_claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MiningClaims.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Deposit {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            mineral_type_id: model.mineral_type_id,
            ore_type_id: model.ore_type_id,
            location_name: model.location_name,
            latitude: model.latitude,
            longitude: model.longitude,
            country: model.country,
            region: model.region,
            estimated_reserves_tonnes: model.estimated_reserves_tonnes,
            average_grade: model.average_grade,
            confidence_level: model.confidence_level,
            discovery_year: model.discovery_year,
            status: model.status,
            notes: model.notes,
            created_by: model.created_by,
            created_at: model.created_at.naive_utc().and_utc(),
        }
    }
}

impl Model {
    /// Build an insertable model for a new deposit
    pub fn from_new_deposit(deposit: &NewDeposit) -> ActiveModel {
        ActiveModel {
            name: Set(deposit.name.clone()),
            mineral_type_id: Set(deposit.mineral_type_id),
            ore_type_id: Set(deposit.ore_type_id),
            location_name: Set(deposit.location_name.clone()),
            latitude: Set(deposit.latitude),
            longitude: Set(deposit.longitude),
            country: Set(deposit.country.clone()),
            region: Set(deposit.region.clone()),
            estimated_reserves_tonnes: Set(deposit.estimated_reserves_tonnes),
            average_grade: Set(deposit.average_grade),
            confidence_level: Set(deposit.confidence_level.clone()),
            discovery_year: Set(deposit.discovery_year),
            status: Set(deposit.status.clone()),
            notes: Set(deposit.notes.clone()),
            created_by: Set(deposit.created_by),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
    }
}
