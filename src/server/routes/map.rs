//! Map layer endpoints
//!
//! Rows are trimmed to what a marker needs; both layers are public.

use crate::core::models::MapFilter;
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Claim layer query
#[derive(Debug, Default, Deserialize)]
pub struct ClaimLayerQuery {
    pub status: Option<String>,
}

/// Configure map routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/deposits", web::get().to(deposit_layer))
        .route("/api/mining-claims", web::get().to(claim_layer));
}

/// GET /api/deposits?mineral_id&status
pub async fn deposit_layer(
    data: web::Data<AppState>,
    filter: web::Query<MapFilter>,
) -> Result<HttpResponse> {
    let points = data.db().deposit_map_points(&filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(points)))
}

/// GET /api/mining-claims?status
pub async fn claim_layer(
    data: web::Data<AppState>,
    query: web::Query<ClaimLayerQuery>,
) -> Result<HttpResponse> {
    let points = data.db().claim_map_points(query.status.as_deref()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(points)))
}
