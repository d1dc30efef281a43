use thiserror::Error;

/// Transport-level failures inside the fetch layer. These never reach callers
/// directly; they are either swallowed or mapped to `ApiError::network()`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            FetchError::SerializationError(error.to_string())
        } else {
            FetchError::NetworkError(error.to_string())
        }
    }
}
