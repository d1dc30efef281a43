/// `response_code` values documented by OpenTDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(i64),
}

impl ResponseCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimit => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::Success)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ResponseCode::Success => "Success",
            ResponseCode::NoResults => "No Results: The API doesn't have enough questions for your query.",
            ResponseCode::InvalidParameter => "Invalid Parameter: The arguments passed aren't valid.",
            ResponseCode::TokenNotFound => "Token Not Found: Session token does not exist.",
            ResponseCode::TokenEmpty => "Token Empty: Session token has returned all possible questions.",
            ResponseCode::RateLimit => "Rate Limit: Too many requests. Please wait a few seconds and try again.",
            ResponseCode::Unknown(_) => "Unknown error occurred",
        }
    }
}

/// Human message for a raw `response_code`.
pub fn response_message(code: i64) -> &'static str {
    ResponseCode::from_code(code).message()
}
