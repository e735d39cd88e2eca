//! Domain core: models and the geospatial import pipeline

pub mod import;
pub mod models;
