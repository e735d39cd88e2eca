//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::SecurityHeadersMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, web};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::initialize(config.clone()).await?;

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Build the CORS policy from configuration
    fn cors(config: &ServerConfig) -> Cors {
        let cors_config = &config.cors;
        let mut cors = Cors::default();

        if !cors_config.enabled {
            return cors;
        }

        if cors_config.allows_all_origins() {
            cors = cors.allow_any_origin();
            cors_config.validate().unwrap_or_else(|e| {
                warn!(error = %e, "CORS Configuration Warning");
            });
        } else {
            for origin in &cors_config.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        cors = cors
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allow_any_header()
            .max_age(cors_config.max_age as usize);

        if cors_config.allow_credentials {
            cors = cors.supports_credentials();
        }

        cors
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = state.config.server();
        let cors = Self::cors(server_config);
        let body_limit = server_config.max_body_size;

        App::new()
            .app_data(state)
            .app_data(web::JsonConfig::default().limit(body_limit))
            .app_data(web::PayloadConfig::default().limit(body_limit))
            .wrap(SecurityHeadersMiddleware)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .client_request_timeout(std::time::Duration::from_secs(self.config.timeout))
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Readable message for port binding failures
    fn format_bind_error(error: std::io::Error, bind_addr: &str) -> GatewayError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => GatewayError::Config(format!(
                "Address {} is already in use; set a different PORT",
                bind_addr
            )),
            std::io::ErrorKind::PermissionDenied => GatewayError::Config(format!(
                "Permission denied binding {}; use a port >= 1024",
                bind_addr
            )),
            _ => GatewayError::Config(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
