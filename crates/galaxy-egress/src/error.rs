//! Egress error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EgressError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status_code}: {body}")]
    Status {
        status_code: u16,
        url: String,
        body: String,
    },

    #[error("No authenticated user in session")]
    MissingUser,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, EgressError>;
