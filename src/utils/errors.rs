use thiserror::Error;

use crate::api::ApiError;

/// Main error type for Folio
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("API error: {0}")]
    ApiError(#[from] ApiError),

    #[error("UI error: {0}")]
    UIError(String),
}
