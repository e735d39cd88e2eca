use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection an import merges into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportTarget {
    Deposits,
    Claims,
}

impl ImportTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportTarget::Deposits => "deposits",
            ImportTarget::Claims => "claims",
        }
    }
}

impl fmt::Display for ImportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome counts of one import run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    #[serde(skip)]
    pub target: ImportTarget,
    pub inserted: usize,
    pub duplicates: usize,
    /// Rows dropped as invalid while parsing or failing on insert
    pub skipped: usize,
    /// Usable rows parsed from the file
    pub total: usize,
}

impl ImportSummary {
    pub fn new(target: ImportTarget) -> Self {
        Self {
            target,
            inserted: 0,
            duplicates: 0,
            skipped: 0,
            total: 0,
        }
    }

    pub fn message(&self) -> String {
        format!("Imported {} {}", self.inserted, self.target)
    }
}
