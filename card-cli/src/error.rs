use data_error::CardError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not load profile: {0}")]
    ProfileLoadError(String),

    #[error("Could not decode token: {0}")]
    TokenDecodeError(String),

    #[error("Invalid share URL: {0}")]
    ShareUrlError(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    CardError(#[from] CardError),
}
