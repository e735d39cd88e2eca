use crate::core::models::{GeologicalReport, ReportAccess};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "geological_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub deposit_id: i32,
    pub report_type: Option<String>,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub author_id: Option<Uuid>,
    pub report_date: Option<DateTimeWithTimeZone>,
    /// public, restricted or private
    pub access_level: Option<String>,
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

impl From<Model> for GeologicalReport {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            deposit_id: model.deposit_id,
            report_type: model.report_type,
            title: model.title,
            summary: model.summary,
            author_id: model.author_id,
            report_date: model.report_date.map(|dt| dt.naive_utc().and_utc()),
            access_level: ReportAccess::from_stored(model.access_level.as_deref()),
        }
    }
}
