use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "learning_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub related_minerals: Option<String>,
    pub difficulty_level: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::core::models::Lesson {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
            content: model.content,
            summary: model.summary,
            related_minerals: model.related_minerals,
            difficulty_level: model.difficulty_level,
            created_at: model.created_at.naive_utc().and_utc(),
        }
    }
}
