use serde::Serialize;
use crate::structs::trivia::trivia_category::TriviaCategory;

/// A category shown in the filter list; unavailable ones have no loaded questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub category: TriviaCategory,
    pub has_questions: bool,
    pub selected: bool,
}
