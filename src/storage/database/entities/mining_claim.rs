use crate::core::models::{MiningClaim, NewClaim};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mining claim database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mining_claims")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// External claim identifier (unique)
    #[sea_orm(unique)]
    pub claim_id: String,
    pub deposit_id: Option<i32>,
    pub owner_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub location_description: Option<String>,
    pub area_hectares: Option<f64>,
    pub claim_type: String,
    pub issue_date: Option<Date>,
    pub expiry_date: Option<Date>,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::deposit::Entity",
        from = "Column::DepositId",
        to = "super::deposit::Column::Id"
    )]
    Deposit,
}

impl Related<super::deposit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deposit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MiningClaim {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            claim_id: model.claim_id,
            deposit_id: model.deposit_id,
            owner_id: model.owner_id,
            company_name: model.company_name,
            location_description: model.location_description,
            area_hectares: model.area_hectares,
            claim_type: model.claim_type,
            issue_date: model.issue_date,
            expiry_date: model.expiry_date,
            status: model.status,
            latitude: model.latitude,
            longitude: model.longitude,
            created_at: model.created_at.naive_utc().and_utc(),
        }
    }
}

impl Model {
    /// Build an insertable model for a new claim
    pub fn from_new_claim(claim: &NewClaim) -> ActiveModel {
        ActiveModel {
            claim_id: Set(claim.claim_id.clone()),
            deposit_id: Set(claim.deposit_id),
            owner_id: Set(claim.owner_id),
            company_name: Set(claim.company_name.clone()),
            location_description: Set(claim.location_description.clone()),
            area_hectares: Set(claim.area_hectares),
            claim_type: Set(claim.claim_type.clone()),
            issue_date: Set(claim.issue_date),
            expiry_date: Set(claim.expiry_date),
            status: Set(claim.status.clone()),
            latitude: Set(claim.latitude),
            longitude: Set(claim.longitude),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
    }
}
