//! Geological report listing

use crate::auth::AuthContext;
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Configure report routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reports", web::get().to(list_reports));
}

/// Reports the caller may read
/// GET /reports
pub async fn list_reports(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    let reports = data.db().list_reports_visible_to(ctx.user_id()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(reports)))
}
