//! Errors surfaced by [`crate::UserStore`] implementations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never produced a response (connection refused, DNS, bad URL).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend rejected request (status {status})")]
    Rejected {
        status: u16,
        /// Human-readable `message` from the error body, if there was one.
        message: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("user {0} not found")]
    NotFound(String),
}

impl StoreError {
    /// The backend's own explanation, shown verbatim to the user when present.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            StoreError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message() {
        let err = StoreError::Rejected {
            status: 409,
            message: Some("Email already exists".to_string()),
        };
        assert_eq!(err.backend_message(), Some("Email already exists"));

        let empty = StoreError::Rejected {
            status: 400,
            message: Some(String::new()),
        };
        assert_eq!(empty.backend_message(), None);

        assert_eq!(StoreError::Transport("refused".into()).backend_message(), None);
    }
}
