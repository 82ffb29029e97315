//! Error types for faqbot.

use std::path::PathBuf;
use thiserror::Error;

/// Library-level error type for faqbot operations.
#[derive(Error, Debug)]
pub enum FaqbotError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Data source not found: {}", .0.display())]
    MissingDataSource(PathBuf),

    #[error("Required fields not found in data source: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FaqbotError {
    /// Whether this error should abort the process rather than a single submission.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            FaqbotError::Service(_) | FaqbotError::Validation(_) | FaqbotError::Embedding(_)
        )
    }
}

/// Result type alias for faqbot operations.
pub type Result<T> = std::result::Result<T, FaqbotError>;
