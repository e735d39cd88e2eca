//! HTTP route handlers

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let storage = state.storage.health_check().await;
    let body = json!({
        "status": if storage.overall { "healthy" } else { "degraded" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": crate::VERSION,
        "database": storage.database,
        "backend": format!("{:?}", state.db().backend_type()),
    });

    if storage.overall {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
