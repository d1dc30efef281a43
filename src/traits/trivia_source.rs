use async_trait::async_trait;
use crate::structs::trivia::api_error::ApiError;
use crate::structs::trivia::trivia_category::TriviaCategory;
use crate::structs::trivia::trivia_question::TriviaQuestion;

/// A provider of trivia categories and questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaSource: Send + Sync {

    /// Never fails: any problem degrades to an empty list.
    async fn fetch_categories(&self) -> Vec<TriviaCategory>;

    async fn fetch_questions(&self, amount: u32) -> Result<Vec<TriviaQuestion>, ApiError>;
}
