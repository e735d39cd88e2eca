//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod import;
pub mod server;
pub mod storage;

pub use app::*;
pub use auth::*;
pub use import::*;
pub use server::*;
pub use storage::*;

/// Default bind address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes, large enough for a 16 MB upload
pub fn default_max_body_size() -> usize {
    16 * 1024 * 1024
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

pub(crate) fn default_true() -> bool {
    true
}
