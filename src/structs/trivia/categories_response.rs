use serde::Deserialize;
use crate::structs::trivia::trivia_category::TriviaCategory;

/// Payload of `api_category.php`.
#[derive(Deserialize, Debug)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub trivia_categories: Option<Vec<TriviaCategory>>,
}
