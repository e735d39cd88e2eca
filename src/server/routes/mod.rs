//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod auth;
pub mod catalog;
pub mod claims;
mod context;
pub mod dashboard;
pub mod deposits;
pub mod geospatial;
pub mod map;
pub mod reports;
pub mod roles;

use actix_web::web;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Register every route group
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure_routes)
        .configure(roles::configure_routes)
        .configure(map::configure_routes)
        .configure(deposits::configure_routes)
        .configure(claims::configure_routes)
        .configure(catalog::configure_routes)
        .configure(reports::configure_routes)
        .configure(dashboard::configure_routes)
        .configure(geospatial::configure_routes);
}
