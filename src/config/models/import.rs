//! Geospatial import configuration

use serde::{Deserialize, Serialize};

/// Geospatial import configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// File extensions accepted for upload (lower case, no dot)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Largest accepted upload in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
    /// Mineral type applied when the upload does not choose one
    #[serde(default = "default_classification_id")]
    pub default_mineral_type_id: i32,
    /// Ore type applied to every imported deposit
    #[serde(default = "default_classification_id")]
    pub default_ore_type_id: i32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            max_file_size: default_max_file_size(),
            default_mineral_type_id: default_classification_id(),
            default_ore_type_id: default_classification_id(),
        }
    }
}

impl ImportConfig {
    /// Merge import configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.allowed_extensions != default_allowed_extensions() {
            self.allowed_extensions = other.allowed_extensions;
        }
        if other.max_file_size != default_max_file_size() {
            self.max_file_size = other.max_file_size;
        }
        if other.default_mineral_type_id != default_classification_id() {
            self.default_mineral_type_id = other.default_mineral_type_id;
        }
        if other.default_ore_type_id != default_classification_id() {
            self.default_ore_type_id = other.default_ore_type_id;
        }
        self
    }

    /// Whether an extension is on the allow-list
    pub fn is_allowed(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    /// Validate import configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_extensions.is_empty() {
            return Err("At least one import file extension must be allowed".to_string());
        }
        if self.max_file_size == 0 {
            return Err("Import max_file_size cannot be 0".to_string());
        }
        Ok(())
    }
}

fn default_allowed_extensions() -> Vec<String> {
    ["json", "geojson", "csv", "zip", "shp", "dbf", "shx"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_max_file_size() -> usize {
    16 * 1024 * 1024
}

fn default_classification_id() -> i32 {
    1
}
