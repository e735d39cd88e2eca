//! Mineral catalog, regulations and learning content

use crate::auth::AuthContext;
use crate::core::models::{Lesson, LessonInput, Mineral, MineralInput};
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Lessons shown next to a mineral
const RELATED_LESSONS: u64 = 5;

/// Mineral listing query
#[derive(Debug, Default, Deserialize)]
pub struct MineralQuery {
    pub page: Option<u64>,
    pub q: Option<String>,
    pub group: Option<String>,
}

/// Search query
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Lesson listing query
#[derive(Debug, Default, Deserialize)]
pub struct LessonQuery {
    pub category: Option<String>,
}

/// Mineral with related lessons
#[derive(Debug, Serialize)]
pub struct MineralDetail {
    #[serde(flatten)]
    pub mineral: Mineral,
    pub lessons: Vec<Lesson>,
}

/// Configure catalog routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/minerals", web::get().to(list_minerals))
        .route("/minerals/{id}", web::get().to(get_mineral))
        .route("/search", web::get().to(search))
        .route("/regulations", web::get().to(list_regulations))
        .route("/regulations/{id}", web::get().to(get_regulation))
        .route("/learn", web::get().to(list_lessons))
        .route("/learn/{id}", web::get().to(get_lesson))
        .service(
            web::scope("/admin/minerals")
                .route("", web::post().to(create_mineral))
                .route("/{id}", web::put().to(update_mineral))
                .route("/{id}", web::delete().to(delete_mineral)),
        )
        .service(
            web::scope("/admin/learning")
                .route("", web::post().to(create_lesson))
                .route("/{id}", web::put().to(update_lesson))
                .route("/{id}", web::delete().to(delete_lesson)),
        );
}

/// GET /minerals?page&q&group
pub async fn list_minerals(
    data: web::Data<AppState>,
    ctx: AuthContext,
    query: web::Query<MineralQuery>,
) -> Result<HttpResponse> {
    ctx.require_login()?;

    let page = query.page.unwrap_or(1).max(1);
    let minerals = data
        .db()
        .list_minerals(page, non_blank(&query.q), non_blank(&query.group))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(minerals)))
}

/// GET /minerals/{id}
pub async fn get_mineral(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    ctx.require_login()?;

    let mineral = data
        .db()
        .find_mineral(path.into_inner())
        .await?
        .ok_or_else(|| GatewayError::not_found("Mineral not found"))?;
    let lessons = data
        .db()
        .lessons_for_mineral(&mineral.name, RELATED_LESSONS)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MineralDetail { mineral, lessons })))
}

/// GET /search?q
pub async fn search(
    data: web::Data<AppState>,
    ctx: AuthContext,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    ctx.require_login()?;

    let results = match non_blank(&query.q) {
        Some(q) => data.db().search_minerals(q).await?,
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(results)))
}

/// GET /regulations
pub async fn list_regulations(data: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse> {
    ctx.require_login()?;

    let regulations = data.db().list_regulations().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(regulations)))
}

/// GET /regulations/{id}
pub async fn get_regulation(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let regulation = data
        .db()
        .find_regulation(path.into_inner())
        .await?
        .ok_or_else(|| GatewayError::not_found("Regulation not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(regulation)))
}

/// GET /learn?category
pub async fn list_lessons(
    data: web::Data<AppState>,
    query: web::Query<LessonQuery>,
) -> Result<HttpResponse> {
    let lessons = data.db().list_lessons(non_blank(&query.category)).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(lessons)))
}

/// GET /learn/{id}
pub async fn get_lesson(data: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let lesson = data
        .db()
        .find_lesson(path.into_inner())
        .await?
        .ok_or_else(|| GatewayError::not_found("Lesson not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(lesson)))
}

/// POST /admin/minerals
pub async fn create_mineral(
    data: web::Data<AppState>,
    ctx: AuthContext,
    payload: web::Json<MineralInput>,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;
    let input = validate_mineral(payload.into_inner())?;

    let mineral = data.db().create_mineral(&input).await?;
    info!("Mineral {} added by {:?}", mineral.id, ctx.user_id());

    Ok(HttpResponse::Created().json(ApiResponse::success(mineral)))
}

/// PUT /admin/minerals/{id}
pub async fn update_mineral(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
    payload: web::Json<MineralInput>,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;
    let input = validate_mineral(payload.into_inner())?;

    let mineral = data
        .db()
        .update_mineral(path.into_inner(), &input)
        .await?
        .ok_or_else(|| GatewayError::not_found("Mineral not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(mineral)))
}

/// DELETE /admin/minerals/{id}
pub async fn delete_mineral(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let id = path.into_inner();
    if !data.db().delete_mineral(id).await? {
        return Err(GatewayError::not_found("Mineral not found"));
    }

    info!("Mineral {} deleted by {:?}", id, ctx.user_id());
    Ok(HttpResponse::Ok().json(ApiResponse::success("Mineral deleted")))
}

/// POST /admin/learning
pub async fn create_lesson(
    data: web::Data<AppState>,
    ctx: AuthContext,
    payload: web::Json<LessonInput>,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;
    let input = validate_lesson(payload.into_inner())?;

    let lesson = data.db().create_lesson(&input).await?;
    info!("Lesson {} added by {:?}", lesson.id, ctx.user_id());

    Ok(HttpResponse::Created().json(ApiResponse::success(lesson)))
}

/// PUT /admin/learning/{id}
pub async fn update_lesson(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
    payload: web::Json<LessonInput>,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;
    let input = validate_lesson(payload.into_inner())?;

    let lesson = data
        .db()
        .update_lesson(path.into_inner(), &input)
        .await?
        .ok_or_else(|| GatewayError::not_found("Lesson not found"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(lesson)))
}

/// DELETE /admin/learning/{id}
pub async fn delete_lesson(
    data: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    require_admin(&ctx)?;

    let id = path.into_inner();
    if !data.db().delete_lesson(id).await? {
        return Err(GatewayError::not_found("Lesson not found"));
    }

    info!("Lesson {} deleted by {:?}", id, ctx.user_id());
    Ok(HttpResponse::Ok().json(ApiResponse::success("Lesson deleted")))
}

fn require_admin(ctx: &AuthContext) -> Result<()> {
    ctx.require_admin().inspect_err(|_| {
        warn!("Catalog admin access denied for {:?}", ctx.user_id());
    })
}

fn validate_mineral(mut input: MineralInput) -> Result<MineralInput> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(GatewayError::validation("Mineral name is required"));
    }
    Ok(input)
}

fn validate_lesson(mut input: LessonInput) -> Result<LessonInput> {
    input.title = input.title.trim().to_string();
    input.category = input.category.trim().to_string();
    if input.title.is_empty() || input.category.is_empty() || input.content.trim().is_empty() {
        return Err(GatewayError::validation(
            "Title, category, and content are required",
        ));
    }
    Ok(input)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
