//! Geospatial import pipeline
//!
//! An uploaded GeoJSON or CSV file is parsed into deposit or claim rows,
//! each row is checked against the store by its natural key and inserted on
//! its own. A run never aborts because of a single bad row; it reports how
//! many rows were inserted, recognised as duplicates or skipped.

mod csv_rows;
mod error;
mod fields;
mod geojson;
mod pipeline;
mod record;
mod summary;


pub use error::ImportError;
pub use fields::{FieldAliases, FieldSource, InvalidValue, LogicalField};
pub use pipeline::{DepositImportOptions, ImportFile, ImportFormat, ImportStore, Importer};
pub use record::{ImportRecord, ParsedBatch, Position};
pub use summary::{ImportSummary, ImportTarget};
