use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "minerals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub formula: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub properties: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub uses: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub economic: Option<String>,
    pub countries: Option<String>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::core::models::Mineral {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            formula: model.formula,
            properties: model.properties,
            uses: model.uses,
            economic: model.economic,
            countries: model.countries,
            image: model.image,
        }
    }
}
