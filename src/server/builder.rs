//! Command line entry and server startup
//!
//! Loads configuration, applies environment overrides and either runs
//! migrations alone or starts the HTTP server.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "georesource", version, about = "Mineral deposit and mining claim explorer")]
pub struct Args {
    /// Configuration file
    #[arg(short, long, env = "GEORESOURCE_CONFIG", default_value = "config/georesource.yaml")]
    pub config: PathBuf,

    /// Extra configuration merged over the base file
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Apply database migrations and exit
    #[arg(long)]
    pub migrate_only: bool,
}

/// Load configuration for the given arguments
///
/// A missing or unreadable base file falls back to defaults; a broken
/// overlay is an error.
pub async fn load_config(args: &Args) -> Result<Config> {
    let mut config = match Config::from_file(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            warn!("Configuration file loading failed, using defaults: {}", e);
            Config::default()
        }
    };

    if let Some(overlay) = &args.overlay {
        config = config.merge(Config::from_file(overlay).await?);
    }

    config.apply_env()
}

/// Run the service
pub async fn run_server(args: Args) -> Result<()> {
    info!("Starting georesource explorer");

    let config = load_config(&args).await?;

    if args.migrate_only {
        let storage = StorageLayer::new(config.storage()).await?;
        storage.migrate().await?;
        info!("Migrations applied");
        return Ok(());
    }

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );

    server.start().await
}
