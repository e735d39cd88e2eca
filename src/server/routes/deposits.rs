//! Deposit endpoints

use crate::auth::{AuthContext, Permission, RecordKind, can_edit};
use crate::core::models::{Deposit, DepositChanges, DepositFilter, MiningClaim, NewDeposit};
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::is_valid_coordinate;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{info, warn};

/// Deposit with the claims filed on it
#[derive(Debug, Serialize)]
pub struct DepositDetail {
    #[serde(flatten)]
    pub deposit: Deposit,
    pub claims: Vec<MiningClaim>,
}

/// Configure deposit routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/deposits")
            .route("", web::get().to(list_deposits))
            .route("", web::post().to(create_deposit))
            .route("/{id}", web::get().to(get_deposit))
            .route("/{id}", web::put().to(update_deposit))
            .route("/{id}", web::delete().to(delete_deposit)),
    );
}

/// GET /deposits?q&mineral&country&status
pub async fn list_deposits(
    data: web::Data<AppState>,
    filter: web::Query<DepositFilter>,
) -> Result<HttpResponse> {
    let deposits = data.db().list_deposits(&filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(deposits)))
}

/// GET /deposits/{id}
pub async fn get_deposit(data: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let deposit = data
        .db()
        .find_deposit(id)
        .await?
        .ok_or_else(|| GatewayError::not_found("Deposit not found"))?;
    let claims = data.db().claims_for_deposit(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(DepositDetail { deposit, claims })))
}

/// POST /deposits
pub async fn create_deposit(
    data: web::Data<AppState>,
    ctx: AuthContext,
    payload: web::Json<NewDeposit>,
) -> Result<HttpResponse> {
    ctx.require_permission(Permission::AddDeposits)?;

    let mut deposit = payload.into_inner();
    validate_location(&deposit.name, deposit.latitude, deposit.longitude)?;
    deposit.created_by = ctx.user_id();

    let created = data.db().create_deposit(&deposit).await?;
    info!("Deposit {} created by {:?}", created.id, ctx.user_id());

    Ok(HttpResponse::Created().json(ApiResponse::success(created)))
}

/// PUT /deposits/{id}
pub async fn update_deposit(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
    payload: web::Json<DepositChanges>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    ensure_can_edit(&data, &ctx, id).await?;

    let changes = payload.into_inner();
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(GatewayError::validation("Deposit name cannot be empty"));
        }
    }

    let updated = data
        .db()
        .update_deposit(id, &changes)
        .await?
        .ok_or_else(|| GatewayError::not_found("Deposit not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(updated)))
}

/// DELETE /deposits/{id}
pub async fn delete_deposit(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    ensure_can_edit(&data, &ctx, id).await?;

    if !data.db().delete_deposit(id).await? {
        return Err(GatewayError::not_found("Deposit not found"));
    }

    info!("Deposit {} deleted by {:?}", id, ctx.user_id());
    Ok(HttpResponse::Ok().json(ApiResponse::success("Deposit deleted")))
}

async fn ensure_can_edit(data: &AppState, ctx: &AuthContext, id: i32) -> Result<()> {
    let user_id = ctx.require_login()?;
    if can_edit(data.db(), ctx, RecordKind::Deposit, id).await? {
        return Ok(());
    }

    warn!("User {} denied edit on deposit {}", user_id, id);
    Err(GatewayError::forbidden(
        "You do not have permission to edit this deposit",
    ))
}

fn validate_location(name: &str, latitude: f64, longitude: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GatewayError::validation("Deposit name is required"));
    }
    if !is_valid_coordinate(latitude, longitude) {
        return Err(GatewayError::validation(format!(
            "Coordinates out of range: {}, {}",
            latitude, longitude
        )));
    }
    Ok(())
}
