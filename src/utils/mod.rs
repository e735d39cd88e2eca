//! Utility modules shared across the service

pub mod auth;
pub mod error;
pub mod validation;
