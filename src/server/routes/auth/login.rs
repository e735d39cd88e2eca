//! User login endpoint

use crate::server::middleware::SESSION_COOKIE;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpRequest, HttpResponse, web};

use super::models::{LoginRequest, LoginResponse, UserInfo};

/// User login endpoint
///
/// Sets the `session` cookie and returns a bearer token for API clients.
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    let outcome = state
        .auth
        .login(&request.username, &request.password, user_agent)
        .await?;

    let auth_config = state.auth.config();
    let cookie = Cookie::build(SESSION_COOKIE, outcome.session_token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(auth_config.secure_cookies)
        .max_age(Duration::seconds(auth_config.session_lifetime as i64))
        .finish();

    let role = state.auth.rbac().resolve_role(Some(&outcome.user));
    let body = LoginResponse {
        user: UserInfo::new(&outcome.user, role),
        access_token: outcome.access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.jwt().expiration(),
    };

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success(body)))
}
