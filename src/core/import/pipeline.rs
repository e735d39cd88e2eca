use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use super::error::ImportError;
use super::record::{ImportRecord, ParsedBatch};
use super::summary::ImportSummary;
use super::{csv_rows, geojson};
use crate::config::ImportConfig;
use crate::core::models::{NewClaim, NewDeposit};
use crate::utils::error::{GatewayError, Result};

/// Store operations the pipeline needs
#[async_trait]
pub trait ImportStore: Send + Sync {
    /// Exact match on name and both coordinates
    async fn deposit_exists(&self, name: &str, latitude: f64, longitude: f64) -> Result<bool>;

    async fn insert_deposit(&self, deposit: &NewDeposit) -> Result<()>;

    async fn claim_exists(&self, claim_id: &str) -> Result<bool>;

    async fn insert_claim(&self, claim: &NewClaim) -> Result<()>;

    async fn mineral_type_exists(&self, id: i32) -> Result<bool>;
}

/// An uploaded file
#[derive(Debug, Clone)]
pub struct ImportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ImportFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Lower-cased extension, if any
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

/// Formats with a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    GeoJson,
    Csv,
}

impl ImportFormat {
    /// Pick a parser for the file.
    ///
    /// Extensions outside the allow-list are rejected. Archive and shapefile
    /// extensions may be allowed yet have no parser, which is also a rejection.
    pub fn detect(file: &ImportFile, config: &ImportConfig) -> std::result::Result<Self, ImportError> {
        let extension = file.extension().ok_or_else(|| {
            ImportError::UnsupportedFileType(format!("{} has no extension", file.filename))
        })?;

        if !config.is_allowed(&extension) {
            return Err(ImportError::UnsupportedFileType(extension));
        }

        match extension.as_str() {
            "json" | "geojson" => Ok(ImportFormat::GeoJson),
            "csv" => Ok(ImportFormat::Csv),
            other => Err(ImportError::UnsupportedFileType(format!(
                "{} files cannot be parsed; use GeoJSON or CSV",
                other
            ))),
        }
    }

    fn parse<R: ImportRecord>(self, bytes: &[u8]) -> std::result::Result<ParsedBatch<R>, ImportError> {
        match self {
            ImportFormat::GeoJson => geojson::parse(bytes),
            ImportFormat::Csv => csv_rows::parse(bytes),
        }
    }
}

/// Classification and provenance stamped on every imported deposit
#[derive(Debug, Clone, Copy)]
pub struct DepositImportOptions {
    pub mineral_type_id: i32,
    pub ore_type_id: i32,
    pub imported_by: Option<Uuid>,
}

impl DepositImportOptions {
    pub fn from_config(config: &ImportConfig, imported_by: Option<Uuid>) -> Self {
        Self {
            mineral_type_id: config.default_mineral_type_id,
            ore_type_id: config.default_ore_type_id,
            imported_by,
        }
    }
}

/// Runs imports against a store
pub struct Importer<'a> {
    store: &'a dyn ImportStore,
    config: &'a ImportConfig,
}

impl<'a> Importer<'a> {
    pub fn new(store: &'a dyn ImportStore, config: &'a ImportConfig) -> Self {
        Self { store, config }
    }

    /// Merge a file into the deposits
    pub async fn import_deposits(
        &self,
        file: &ImportFile,
        options: DepositImportOptions,
    ) -> Result<ImportSummary> {
        let mut batch = self.parse::<NewDeposit>(file)?;
        if !self.store.mineral_type_exists(options.mineral_type_id).await? {
            return Err(GatewayError::Validation(format!(
                "Unknown mineral type id {}",
                options.mineral_type_id
            )));
        }

        for deposit in &mut batch.rows {
            deposit.mineral_type_id = Some(options.mineral_type_id);
            deposit.ore_type_id = Some(options.ore_type_id);
            deposit.created_by = options.imported_by;
        }

        Ok(self.merge(batch).await)
    }

    /// Merge a file into the mining claims
    pub async fn import_claims(&self, file: &ImportFile) -> Result<ImportSummary> {
        let batch = self.parse::<NewClaim>(file)?;
        Ok(self.merge(batch).await)
    }

    fn parse<R: ImportRecord>(&self, file: &ImportFile) -> Result<ParsedBatch<R>> {
        if file.filename.is_empty() {
            return Err(ImportError::NoFileProvided.into());
        }

        let format = ImportFormat::detect(file, self.config)?;
        let batch = format.parse::<R>(&file.bytes)?;
        if batch.rows.is_empty() {
            return Err(ImportError::NoUsableRows.into());
        }

        Ok(batch)
    }

    /// Check and insert row by row; a row that fails is counted and the run continues
    async fn merge<R: ImportRecord>(&self, batch: ParsedBatch<R>) -> ImportSummary {
        let mut summary = ImportSummary::new(R::TARGET);
        summary.total = batch.rows.len();
        summary.skipped = batch.skipped;

        for (index, row) in batch.rows.iter().enumerate() {
            match row.is_duplicate(self.store).await {
                Ok(true) => {
                    summary.duplicates += 1;
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!("Duplicate check failed for {} row {}: {}", R::TARGET, index, e);
                    summary.skipped += 1;
                    continue;
                }
            }

            match row.insert(self.store).await {
                Ok(()) => summary.inserted += 1,
                Err(e) => {
                    warn!("Insert failed for {} row {}: {}", R::TARGET, index, e);
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "Imported {}: inserted={} duplicates={} skipped={} total={}",
            R::TARGET,
            summary.inserted,
            summary.duplicates,
            summary.skipped,
            summary.total
        );
        summary
    }
}
