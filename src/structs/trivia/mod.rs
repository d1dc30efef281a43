pub mod api_error;
pub mod categories_response;
pub mod questions_response;
pub mod trivia_category;
pub mod trivia_data_result;
pub mod trivia_question;
