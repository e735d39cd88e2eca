//! Session endpoints

use crate::auth::AuthContext;
use crate::server::middleware::{SESSION_COOKIE, extract_session_token};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, warn};

use super::models::{ProfileResponse, UserInfo};

/// User logout endpoint
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    info!("User logout");

    if let Some(session_token) = extract_session_token(req.headers()) {
        if let Err(e) = state.auth.logout(&session_token).await {
            warn!("Failed to close session: {}", e);
        }
    }

    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success("Logged out"))
}

/// Current account, role and permission tokens
pub async fn me(state: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    let user_id = ctx.require_login()?;
    let user = state
        .db()
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| GatewayError::not_found("User not found"))?;

    let role = ctx.role();
    let body = ProfileResponse {
        user: UserInfo::new(&user, role),
        role_name: state.auth.rbac().get_role(role).name.clone(),
        permissions: ctx.permissions().tokens(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}
