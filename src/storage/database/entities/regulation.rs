use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ss_regulations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub applicable_states: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    pub contact_authority: Option<String>,
    pub last_updated: Option<DateTimeWithTimeZone>,
    pub document_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::core::models::Regulation {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            applicable_states: model.applicable_states,
            requirements: model.requirements,
            contact_authority: model.contact_authority,
            last_updated: model.last_updated.map(|dt| dt.naive_utc().and_utc()),
            document_url: model.document_url,
        }
    }
}
