//! Role dashboard

use crate::auth::AuthContext;
use crate::core::models::{Deposit, MiningClaim, UserRole};
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Serialize;

const RECENT_ITEMS: u64 = 5;

/// Dashboard body; record lists appear only for roles that own such records
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub role: UserRole,
    pub role_name: String,
    pub role_description: String,
    pub permissions: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_deposits: Option<Vec<Deposit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_claims: Option<Vec<MiningClaim>>,
}

/// Configure dashboard routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard));
}

/// GET /dashboard
pub async fn dashboard(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    let user_id = ctx.require_login()?;
    let definition = data.auth.rbac().get_role(ctx.role());

    let recent_deposits = if ctx.is_geologist() {
        Some(data.db().recent_deposits_by(user_id, RECENT_ITEMS).await?)
    } else {
        None
    };
    let recent_claims = if ctx.is_explorer() {
        Some(data.db().recent_claims_by(user_id, RECENT_ITEMS).await?)
    } else {
        None
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(Dashboard {
        role: ctx.role(),
        role_name: definition.name.clone(),
        role_description: definition.description.clone(),
        permissions: ctx.permissions().tokens(),
        recent_deposits,
        recent_claims,
    })))
}
