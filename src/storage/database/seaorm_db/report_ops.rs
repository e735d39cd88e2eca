use crate::core::models::GeologicalReport;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use uuid::Uuid;

use super::super::entities::{self, geological_report};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Reports the reader may see, newest first
    pub async fn list_reports_visible_to(&self, reader: Option<Uuid>) -> Result<Vec<GeologicalReport>> {
        let models = entities::GeologicalReport::find()
            .order_by_desc(geological_report::Column::ReportDate)
            .order_by_desc(geological_report::Column::Id)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models
            .into_iter()
            .map(GeologicalReport::from)
            .filter(|report| report.is_visible_to(reader))
            .collect())
    }
}
