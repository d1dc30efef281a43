use futures::join;
use crate::structs::trivia::trivia_data_result::TriviaDataResult;
use crate::traits::trivia_source::TriviaSource;

/// Fetches categories and questions concurrently and waits for both.
///
/// A question error leaves `questions` empty; categories are returned whatever
/// happened to the questions.
pub async fn load_trivia_data<S>(source: &S, amount: u32) -> TriviaDataResult
where
    S: TriviaSource + ?Sized,
{
    let (categories, questions) = join!(source.fetch_categories(), source.fetch_questions(amount));

    match questions {
        Ok(questions) => TriviaDataResult {
            categories,
            questions,
            error: None,
        },
        Err(error) => TriviaDataResult {
            categories,
            questions: Vec::new(),
            error: Some(error),
        },
    }
}
