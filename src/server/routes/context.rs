//! Request extractor for [`AuthContext`]

use crate::auth::AuthContext;
use crate::server::middleware::extract_auth_method;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::LocalBoxFuture;

/// Resolved once per request and cached in the request extensions
impl FromRequest for AuthContext {
    type Error = GatewayError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(ctx) = req.extensions().get::<AuthContext>() {
            let ctx = ctx.clone();
            return Box::pin(async move { Ok(ctx) });
        }

        let req = req.clone();
        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| GatewayError::internal("Application state not configured"))?
                .clone();

            let method = extract_auth_method(req.headers());
            let ctx = state.auth.resolve_context(&method).await?;
            req.extensions_mut().insert(ctx.clone());
            Ok(ctx)
        })
    }
}
