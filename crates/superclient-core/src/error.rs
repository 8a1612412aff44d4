//! Error Types

use thiserror::Error;

/// Failure talking to the backend API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired")]
    Unauthorized,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map an HTTP status to an error; `None` for 2xx
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(ApiError::Unauthorized),
            other => Some(ApiError::Status(other)),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// The stored contacts payload could not be decoded
#[derive(Debug, Error)]
#[error("stored contacts are malformed: {0}")]
pub struct ContactsDecodeError(#[from] pub serde_json::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(204), None);
        assert_eq!(ApiError::from_status(401), Some(ApiError::Unauthorized));
        assert_eq!(ApiError::from_status(500), Some(ApiError::Status(500)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(404).to_string(), "unexpected status 404");
        assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
    }
}
