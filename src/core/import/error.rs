use thiserror::Error;

/// Caller-facing failures of an import run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("No file provided")]
    NoFileProvided,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("No valid data found in file")]
    NoUsableRows,
}

impl ImportError {
    /// Machine readable code used in error responses
    pub fn code(&self) -> &'static str {
        match self {
            ImportError::NoFileProvided => "NO_FILE_PROVIDED",
            ImportError::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            ImportError::MalformedDocument(_) => "MALFORMED_DOCUMENT",
            ImportError::NoUsableRows => "NO_USABLE_ROWS",
        }
    }
}
