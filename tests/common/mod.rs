use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use trivia_dashboard::services::opentdb_client::OpenTdbClient;

pub fn question_json(category: &str, difficulty: &str) -> Value {
    json!({
        "category": category,
        "type": "multiple",
        "difficulty": difficulty,
        "question": format!("A {} question about {}?", difficulty, category),
        "correct_answer": "Right",
        "incorrect_answers": ["Wrong 1", "Wrong 2", "Wrong 3"]
    })
}

pub fn client_for(server: &ServerGuard) -> OpenTdbClient {
    OpenTdbClient::with_base_url(server.url())
}

pub async fn mock_questions(server: &mut ServerGuard, amount: u32, status: usize, body: Value) -> Mock {
    server
        .mock("GET", "/api.php")
        .match_query(Matcher::UrlEncoded("amount".into(), amount.to_string()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_categories(server: &mut ServerGuard, body: Value) -> Mock {
    server
        .mock("GET", "/api_category.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
