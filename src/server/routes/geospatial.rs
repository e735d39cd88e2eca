//! Admin geospatial data management
//!
//! Import endpoints take `multipart/form-data` with a `file` field and, for
//! deposits, an optional `mineral_type_id` field. Authorization is checked
//! before any part of the body is read.

use crate::auth::AuthContext;
use crate::core::import::{DepositImportOptions, ImportFile, ImportSummary, Importer};
use crate::core::models::MineralType;
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::storage::database::DatabaseStats;
use crate::utils::error::{GatewayError, Result};
use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures::StreamExt;
use serde::Serialize;
use tracing::{error, info, warn};

/// Flat body returned by the import endpoints
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub summary: ImportSummary,
}

impl From<ImportSummary> for ImportResponse {
    fn from(summary: ImportSummary) -> Self {
        Self {
            success: true,
            message: summary.message(),
            summary,
        }
    }
}

/// Overview of the geospatial collections
#[derive(Debug, Serialize)]
pub struct GeospatialOverview {
    #[serde(flatten)]
    pub stats: DatabaseStats,
    pub mineral_types: Vec<MineralType>,
}

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/geospatial")
            .route("", web::get().to(overview))
            .route("/deposits-summary", web::get().to(deposits_summary))
            .route("/claims-summary", web::get().to(claims_summary))
            .route("/import-deposits", web::post().to(import_deposits))
            .route("/import-claims", web::post().to(import_claims))
            .route("/clear-deposits", web::post().to(clear_deposits))
            .route("/clear-claims", web::post().to(clear_claims)),
    );
}

/// GET /admin/geospatial
pub async fn overview(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let stats = data.db().stats().await?;
    let mineral_types = data.db().list_mineral_types().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(GeospatialOverview {
        stats,
        mineral_types,
    })))
}

/// GET /admin/geospatial/deposits-summary
pub async fn deposits_summary(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let summary = data.db().deposit_status_summary().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// GET /admin/geospatial/claims-summary
pub async fn claims_summary(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let summary = data.db().claim_status_summary().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// POST /admin/geospatial/import-deposits
pub async fn import_deposits(
    data: web::Data<AppState>,
    ctx: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let config = data.config().import();
    let form = ImportForm::read(payload, config.max_file_size).await?;

    let mut options = DepositImportOptions::from_config(config, ctx.user_id());
    if let Some(raw) = form.mineral_type_id.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        options.mineral_type_id = raw
            .parse()
            .map_err(|_| GatewayError::validation(format!("Invalid mineral type id: {}", raw)))?;
    }

    info!(
        "Deposit import of {} by {:?}",
        form.file.filename,
        ctx.user_id()
    );
    let summary = Importer::new(data.db(), config)
        .import_deposits(&form.file, options)
        .await?;

    Ok(HttpResponse::Ok().json(ImportResponse::from(summary)))
}

/// POST /admin/geospatial/import-claims
pub async fn import_claims(
    data: web::Data<AppState>,
    ctx: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let config = data.config().import();
    let form = ImportForm::read(payload, config.max_file_size).await?;

    info!("Claim import of {} by {:?}", form.file.filename, ctx.user_id());
    let summary = Importer::new(data.db(), config)
        .import_claims(&form.file)
        .await?;

    Ok(HttpResponse::Ok().json(ImportResponse::from(summary)))
}

/// POST /admin/geospatial/clear-deposits
pub async fn clear_deposits(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let removed = data.db().clear_deposits().await?;
    warn!("All deposits cleared by {:?}", ctx.user_id());
    Ok(HttpResponse::Ok().json(ApiResponse::success(format!(
        "Cleared {} deposits",
        removed
    ))))
}

/// POST /admin/geospatial/clear-claims
pub async fn clear_claims(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let removed = data.db().clear_claims().await?;
    warn!("All claims cleared by {:?}", ctx.user_id());
    Ok(HttpResponse::Ok().json(ApiResponse::success(format!(
        "Cleared {} claims",
        removed
    ))))
}

fn require_admin(ctx: &AuthContext) -> Result<()> {
    ctx.require_admin().inspect_err(|_| {
        warn!("Geospatial admin access denied for {:?}", ctx.user_id());
    })
}

/// Parsed import form
struct ImportForm {
    file: ImportFile,
    mineral_type_id: Option<String>,
}

impl ImportForm {
    /// Drain the multipart stream; a missing file leaves an empty filename
    async fn read(mut payload: Multipart, max_file_size: usize) -> Result<Self> {
        let mut file = ImportFile::new("", Vec::new());
        let mut mineral_type_id = None;

        while let Some(item) = payload.next().await {
            let mut field = item.map_err(|e| {
                error!("Error reading multipart field: {}", e);
                GatewayError::bad_request(format!("Invalid multipart data: {}", e))
            })?;

            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "file" => {
                    let filename = field
                        .content_disposition()
                        .and_then(|cd| cd.get_filename())
                        .unwrap_or_default()
                        .to_string();
                    let bytes = read_field(&mut field, max_file_size).await?;
                    file = ImportFile::new(filename, bytes);
                }
                "mineral_type_id" => {
                    let bytes = read_field(&mut field, 64).await?;
                    mineral_type_id = Some(String::from_utf8_lossy(&bytes).into_owned());
                }
                _ => while field.next().await.is_some() {},
            }
        }

        Ok(Self {
            file,
            mineral_type_id,
        })
    }
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| {
            error!("Error reading file chunk: {}", e);
            GatewayError::bad_request("Error reading file")
        })?;
        if data.len() + bytes.len() > limit {
            return Err(GatewayError::bad_request(format!(
                "Upload exceeds the {} byte limit",
                limit
            )));
        }
        data.extend_from_slice(&bytes);
    }
    Ok(data)
}
