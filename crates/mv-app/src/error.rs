//! Error types for the mv-app service layer.

use std::path::PathBuf;

/// Unified error for the CLI and the GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported config file extension: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<mv_config::ConfigFileError> for AppError {
    fn from(err: mv_config::ConfigFileError) -> Self {
        match err {
            mv_config::ConfigFileError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Config(other.to_string()),
        }
    }
}

impl From<mv_core::ConfigError> for AppError {
    fn from(err: mv_core::ConfigError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<mv_core::RenderError> for AppError {
    fn from(err: mv_core::RenderError) -> Self {
        AppError::Render(err.to_string())
    }
}
