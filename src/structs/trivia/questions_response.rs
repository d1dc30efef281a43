use serde::Deserialize;
use crate::structs::trivia::trivia_question::TriviaQuestion;

/// Payload of `api.php`. `results` may be missing on error responses.
#[derive(Deserialize, Debug)]
pub struct QuestionsResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Option<Vec<TriviaQuestion>>,
}
