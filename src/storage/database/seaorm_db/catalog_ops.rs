use crate::core::models::{Lesson, LessonInput, Mineral, MineralInput, MineralType, Regulation};
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, learning_content, mineral, mineral_type, regulation};
use super::types::SeaOrmDatabase;

/// Minerals shown per catalog page
pub const MINERALS_PER_PAGE: u64 = 8;

/// One page of the mineral catalog
#[derive(Debug, Clone, serde::Serialize)]
pub struct MineralPage {
    pub minerals: Vec<Mineral>,
    pub page: u64,
    pub pages: u64,
    pub total: u64,
}

impl SeaOrmDatabase {
    /// Page through minerals; `group` matches inside the properties text
    pub async fn list_minerals(
        &self,
        page: u64,
        q: Option<&str>,
        group: Option<&str>,
    ) -> Result<MineralPage> {
        let page = page.max(1);
        let mut query = entities::Mineral::find();

        if let Some(q) = q.filter(|q| !q.is_empty()) {
            query = query.filter(mineral::Column::Name.contains(q));
        }
        if let Some(group) = group.filter(|g| !g.is_empty()) {
            query = query.filter(mineral::Column::Properties.contains(group));
        }

        let paginator = query
            .order_by_asc(mineral::Column::Id)
            .paginate(&self.db, MINERALS_PER_PAGE);
        let counts = paginator
            .num_items_and_pages()
            .await
            .map_err(GatewayError::Database)?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(GatewayError::Database)?;

        Ok(MineralPage {
            minerals: models.into_iter().map(Mineral::from).collect(),
            page,
            pages: counts.number_of_pages,
            total: counts.number_of_items,
        })
    }

    pub async fn find_mineral(&self, id: i32) -> Result<Option<Mineral>> {
        let model = entities::Mineral::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(model.map(Mineral::from))
    }

    /// Match against name, producing countries or properties
    pub async fn search_minerals(&self, q: &str) -> Result<Vec<Mineral>> {
        let models = entities::Mineral::find()
            .filter(
                Condition::any()
                    .add(mineral::Column::Name.contains(q))
                    .add(mineral::Column::Countries.contains(q))
                    .add(mineral::Column::Properties.contains(q)),
            )
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(models.into_iter().map(Mineral::from).collect())
    }

    pub async fn list_mineral_types(&self) -> Result<Vec<MineralType>> {
        let models = entities::MineralType::find()
            .order_by_asc(mineral_type::Column::Name)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(models.into_iter().map(MineralType::from).collect())
    }

    pub async fn list_regulations(&self) -> Result<Vec<Regulation>> {
        let models = entities::Regulation::find()
            .order_by_asc(regulation::Column::Title)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(models.into_iter().map(Regulation::from).collect())
    }

    pub async fn find_regulation(&self, id: i32) -> Result<Option<Regulation>> {
        let model = entities::Regulation::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(model.map(Regulation::from))
    }

    /// Lessons grouped by category, newest first within a category
    pub async fn list_lessons(&self, category: Option<&str>) -> Result<Vec<Lesson>> {
        let mut query = entities::LearningContent::find();
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            query = query.filter(learning_content::Column::Category.eq(category));
        }

        let models = query
            .order_by_asc(learning_content::Column::Category)
            .order_by_desc(learning_content::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(models.into_iter().map(Lesson::from).collect())
    }

    pub async fn find_lesson(&self, id: i32) -> Result<Option<Lesson>> {
        let model = entities::LearningContent::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(model.map(Lesson::from))
    }

    /// Lessons whose related mineral list mentions `name`
    pub async fn lessons_for_mineral(&self, name: &str, limit: u64) -> Result<Vec<Lesson>> {
        let models = entities::LearningContent::find()
            .filter(learning_content::Column::RelatedMinerals.contains(name))
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(models.into_iter().map(Lesson::from).collect())
    }

    pub async fn create_mineral(&self, input: &MineralInput) -> Result<Mineral> {
        debug!("Creating mineral: {}", input.name);

        let mut active = <mineral::ActiveModel as ActiveModelTrait>::default();
        apply_mineral(&mut active, input);
        let model = active.insert(&self.db).await.map_err(GatewayError::Database)?;
        Ok(model.into())
    }

    /// Replace a mineral's fields; `None` when it does not exist
    pub async fn update_mineral(&self, id: i32, input: &MineralInput) -> Result<Option<Mineral>> {
        let Some(model) = entities::Mineral::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?
        else {
            return Ok(None);
        };

        let mut active: mineral::ActiveModel = model.into();
        apply_mineral(&mut active, input);
        let model = active.update(&self.db).await.map_err(GatewayError::Database)?;
        Ok(Some(model.into()))
    }

    pub async fn delete_mineral(&self, id: i32) -> Result<bool> {
        let result = entities::Mineral::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(result.rows_affected > 0)
    }

    pub async fn create_lesson(&self, input: &LessonInput) -> Result<Lesson> {
        debug!("Creating lesson: {}", input.title);

        let mut active = learning_content::ActiveModel {
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        apply_lesson(&mut active, input);
        let model = active.insert(&self.db).await.map_err(GatewayError::Database)?;
        Ok(model.into())
    }

    /// Replace a lesson's fields; `None` when it does not exist
    pub async fn update_lesson(&self, id: i32, input: &LessonInput) -> Result<Option<Lesson>> {
        let Some(model) = entities::LearningContent::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?
        else {
            return Ok(None);
        };

        let mut active: learning_content::ActiveModel = model.into();
        apply_lesson(&mut active, input);
        let model = active.update(&self.db).await.map_err(GatewayError::Database)?;
        Ok(Some(model.into()))
    }

    pub async fn delete_lesson(&self, id: i32) -> Result<bool> {
        let result = entities::LearningContent::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;
        Ok(result.rows_affected > 0)
    }
}

fn apply_mineral(active: &mut mineral::ActiveModel, input: &MineralInput) {
    active.name = Set(input.name.clone());
    active.formula = Set(input.formula.clone());
    active.properties = Set(input.properties.clone());
    active.uses = Set(input.uses.clone());
    active.economic = Set(input.economic.clone());
    active.countries = Set(input.countries.clone());
    active.image = Set(input.image.clone());
}

fn apply_lesson(active: &mut learning_content::ActiveModel, input: &LessonInput) {
    active.title = Set(input.title.clone());
    active.category = Set(input.category.clone());
    active.content = Set(input.content.clone());
    active.summary = Set(input.summary.clone());
    active.related_minerals = Set(input.related_minerals.clone());
    active.difficulty_level = Set(input.difficulty_level.clone());
}
