//! User registration endpoint

use crate::auth::Registration;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::info;

use super::models::UserInfo;

/// User registration endpoint
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<Registration>,
) -> Result<HttpResponse> {
    info!("User registration attempt: {}", request.username);

    let user = state.auth.register(request.into_inner()).await?;
    let role = state.auth.rbac().resolve_role(Some(&user));

    Ok(HttpResponse::Created().json(ApiResponse::success(UserInfo::new(&user, role))))
}
