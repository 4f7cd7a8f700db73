//! Errors raised while talking to the users backend.

use store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid backend URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("backend returned {status}")]
    Status { status: u16, message: Option<String> },
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) if e.is_decode() => StoreError::Decode(e.to_string()),
            ApiError::Http(e) => StoreError::Transport(e.to_string()),
            ApiError::InvalidUrl { url, reason } => {
                StoreError::Transport(format!("invalid backend URL {url}: {reason}"))
            }
            ApiError::Status { status, message } => StoreError::Rejected { status, message },
        }
    }
}
