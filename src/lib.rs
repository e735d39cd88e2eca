//! # georesource-explorer
//!
//! Role-gated catalog and map service for mineral deposits, mining claims
//! and geological content.
//!
//! ## Features
//!
//! - **Roles and permissions**: a static role table resolved per request,
//!   with admin holding every capability
//! - **Ownership guards**: geologists edit the deposits they recorded,
//!   explorers the claims they filed
//! - **Geospatial import**: point GeoJSON and CSV files merged into deposits
//!   or claims, deduplicated on natural keys so re-imports are safe
//! - **Catalog**: minerals, regulations, learning content and geological reports
//!
//! ## Running the service
//!
//! ```rust,no_run
//! use georesource_explorer::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/georesource.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Importing without the HTTP layer
//!
//! Anything implementing [`core::import::ImportStore`] can receive an import:
//!
//! ```rust,ignore
//! let importer = Importer::new(&store, config.import());
//! let summary = importer.import_claims(&ImportFile::new("claims.csv", bytes)).await?;
//! println!("{}", summary.message());
//! ```

#![allow(missing_docs)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use server::HttpServer;
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
