use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::{NETWORK_ERROR_MESSAGE, TRANSPORT_ERROR_CODE};
use crate::enums::response_code::ResponseCode;

/// Error surfaced to the presentation layer when questions cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

impl ApiError {
    pub fn from_response_code(code: i64) -> Self {
        Self {
            code,
            message: ResponseCode::from_code(code).message().to_string(),
        }
    }

    pub fn network() -> Self {
        Self {
            code: TRANSPORT_ERROR_CODE,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        self.code == TRANSPORT_ERROR_CODE
    }

    pub fn is_rate_limited(&self) -> bool {
        ResponseCode::from_code(self.code) == ResponseCode::RateLimit
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
