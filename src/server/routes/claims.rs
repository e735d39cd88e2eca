//! Mining claim endpoints

use crate::auth::{AuthContext, RecordKind, can_edit};
use crate::core::models::{ClaimChanges, ClaimFilter, NewClaim, UserRole};
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use tracing::{info, warn};

/// Configure claim routes
///
/// Reads address a claim by its external id, writes by row id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/claims")
            .route("", web::get().to(list_claims))
            .route("", web::post().to(create_claim))
            .service(
                web::resource("/{key}")
                    .route(web::get().to(get_claim))
                    .route(web::put().to(update_claim))
                    .route(web::delete().to(delete_claim)),
            ),
    );
}

/// GET /claims?q&status
pub async fn list_claims(
    data: web::Data<AppState>,
    filter: web::Query<ClaimFilter>,
) -> Result<HttpResponse> {
    let claims = data.db().list_claims(&filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(claims)))
}

/// GET /claims/{claim_id}
pub async fn get_claim(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let claim = data
        .db()
        .find_claim_by_claim_id(&path)
        .await?
        .ok_or_else(|| GatewayError::not_found("Claim not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(claim)))
}

/// POST /claims
pub async fn create_claim(
    data: web::Data<AppState>,
    ctx: AuthContext,
    payload: web::Json<NewClaim>,
) -> Result<HttpResponse> {
    ctx.require_role(UserRole::Explorer)?;

    let mut claim = payload.into_inner();
    claim.claim_id = claim.claim_id.trim().to_string();
    if claim.claim_id.is_empty() {
        return Err(GatewayError::validation("Claim ID is required"));
    }
    if data.db().claim_exists(&claim.claim_id).await? {
        return Err(GatewayError::conflict("Claim ID already exists"));
    }
    claim.owner_id = ctx.user_id();

    let created = data.db().create_claim(&claim).await?;
    info!("Claim {} filed by {:?}", created.claim_id, ctx.user_id());

    Ok(HttpResponse::Created().json(ApiResponse::success(created)))
}

/// PUT /claims/{id}
pub async fn update_claim(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
    payload: web::Json<ClaimChanges>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    ensure_can_edit(&data, &ctx, id).await?;

    let updated = data
        .db()
        .update_claim(id, &payload)
        .await?
        .ok_or_else(|| GatewayError::not_found("Claim not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(updated)))
}

/// DELETE /claims/{id}
pub async fn delete_claim(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    ensure_can_edit(&data, &ctx, id).await?;

    if !data.db().delete_claim(id).await? {
        return Err(GatewayError::not_found("Claim not found"));
    }

    info!("Claim {} deleted by {:?}", id, ctx.user_id());
    Ok(HttpResponse::Ok().json(ApiResponse::success("Claim deleted")))
}

async fn ensure_can_edit(data: &AppState, ctx: &AuthContext, id: i32) -> Result<()> {
    let user_id = ctx.require_login()?;
    if can_edit(data.db(), ctx, RecordKind::Claim, id).await? {
        return Ok(());
    }

    warn!("User {} denied edit on claim {}", user_id, id);
    Err(GatewayError::forbidden(
        "You do not have permission to edit this claim",
    ))
}
