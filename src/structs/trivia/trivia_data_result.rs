use serde::Serialize;
use crate::structs::trivia::api_error::ApiError;
use crate::structs::trivia::trivia_category::TriviaCategory;
use crate::structs::trivia::trivia_question::TriviaQuestion;

/// Combined outcome of one dashboard load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TriviaDataResult {
    pub categories: Vec<TriviaCategory>,
    pub questions: Vec<TriviaQuestion>,
    pub error: Option<ApiError>,
}

impl TriviaDataResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
