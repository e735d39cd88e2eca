//! Role table endpoint

use crate::server::AppState;
use crate::server::routes::ApiResponse;
use actix_web::{HttpResponse, web};

/// Configure role routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/roles", web::get().to(list_roles));
}

/// Static role table with display names, descriptions and permission tokens
/// GET /api/roles
pub async fn list_roles(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data.auth.rbac().list_roles()))
}
