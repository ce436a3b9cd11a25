//! Error handling

use rogue_core::ReportError;
use thiserror::Error;

use crate::delivery::DeliveryError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid configuration: {0}")]
    Validation(String),

    // Detection fetch (network, auth, bad payload). Never retried.
    #[error("upstream fetch failed: {0}")]
    Upstream(String),

    // One delivery attempt
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    // Pipeline errors (malformed timestamps)
    #[error(transparent)]
    Core(#[from] ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
