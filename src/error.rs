//! Unified error types for the migration-dash application.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Errors raised while loading a dataset file
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),

    #[error("Dataset invalid ({path}): {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("IO error reading dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for dataset loading
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;
