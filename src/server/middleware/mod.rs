//! HTTP middleware and request helpers

mod helpers;
mod security;

pub use helpers::{SESSION_COOKIE, extract_auth_method, extract_session_token};
pub use security::{SecurityHeadersMiddleware, SecurityHeadersMiddlewareService};
