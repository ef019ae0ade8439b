// Central Error Type for the Adapter

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Container error: {0}")]
    Container(#[from] crate::port::ContainerError),

    /// The external tool exited cleanly but did not leave the expected artifact
    #[error("External tool failure: {0}")]
    ExternalTool(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
