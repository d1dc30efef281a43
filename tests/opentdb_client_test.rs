use mockito::{Matcher, Server};
use serde_json::json;
use trivia_dashboard::services::opentdb_client::OpenTdbClient;
use trivia_dashboard::structs::trivia::api_error::ApiError;
use trivia_dashboard::traits::trivia_source::TriviaSource;

use crate::common::{client_for, mock_categories, mock_questions, question_json};

#[tokio::test]
async fn success_returns_results_unchanged() {
    let mut server = Server::new_async().await;
    let results = json!([
        question_json("History", "easy"),
        question_json("Geography", "hard"),
    ]);
    let mock = mock_questions(&mut server, 2, 200, json!({ "response_code": 0, "results": results })).await;

    let questions = client_for(&server).fetch_questions(2).await.expect("questions");
    mock.assert_async().await;

    assert_eq!(questions.len(), 2);
    assert_eq!(serde_json::to_value(&questions).expect("serializable"), results);
}

#[tokio::test]
async fn success_without_results_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = mock_questions(&mut server, 50, 200, json!({ "response_code": 0 })).await;

    let questions = client_for(&server).fetch_questions(50).await.expect("questions");
    assert!(questions.is_empty());
}

#[tokio::test]
async fn response_codes_map_to_messages() {
    let cases = [
        (1, "No Results: The API doesn't have enough questions for your query."),
        (2, "Invalid Parameter: The arguments passed aren't valid."),
        (3, "Token Not Found: Session token does not exist."),
        (4, "Token Empty: Session token has returned all possible questions."),
        (5, "Rate Limit: Too many requests. Please wait a few seconds and try again."),
        (7, "Unknown error occurred"),
    ];

    for (code, message) in cases {
        let mut server = Server::new_async().await;
        let _mock = mock_questions(&mut server, 10, 200, json!({ "response_code": code, "results": [] })).await;

        let error = client_for(&server).fetch_questions(10).await.expect_err("api error");
        assert_eq!(error, ApiError { code, message: message.to_string() });
    }
}

#[tokio::test]
async fn rate_limit_status_still_reads_response_code() {
    let mut server = Server::new_async().await;
    let _mock = mock_questions(&mut server, 50, 429, json!({ "response_code": 5, "results": [] })).await;

    let error = client_for(&server).fetch_questions(50).await.expect_err("rate limited");
    assert_eq!(error.code, 5);
    assert!(error.is_rate_limited());
}

#[tokio::test]
async fn non_json_body_is_a_network_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api.php")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let error = client_for(&server).fetch_questions(50).await.expect_err("transport failure");
    assert_eq!(error.code, -1);
    assert_eq!(error.message, "Network error: Failed to fetch questions. Please check your connection.");
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let client = OpenTdbClient::with_base_url("http://127.0.0.1:1");
    assert_eq!(client.fetch_questions(5).await, Err(ApiError::network()));
}

#[tokio::test]
async fn question_categories_are_unescaped_at_ingestion() {
    let mut server = Server::new_async().await;
    let _mock = mock_questions(
        &mut server,
        1,
        200,
        json!({ "response_code": 0, "results": [question_json("Entertainment: Music &amp; Stuff", "medium")] }),
    )
    .await;

    let questions = client_for(&server).fetch_questions(1).await.expect("questions");
    assert_eq!(questions[0].category, "Entertainment: Music & Stuff");
}

#[tokio::test]
async fn categories_are_unescaped() {
    let mut server = Server::new_async().await;
    let mock = mock_categories(
        &mut server,
        json!({ "trivia_categories": [
            { "id": 9, "name": "General Knowledge" },
            { "id": 12, "name": "Entertainment: Music &amp; Stuff" }
        ] }),
    )
    .await;

    let categories = client_for(&server).fetch_categories().await;
    mock.assert_async().await;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["General Knowledge", "Entertainment: Music & Stuff"]);
    assert_eq!(categories[1].id, 12);
}

#[tokio::test]
async fn category_failures_degrade_to_empty() {
    let mut server = Server::new_async().await;
    let _mock = mock_categories(&mut server, json!({ "unexpected": true })).await;
    assert!(client_for(&server).fetch_categories().await.is_empty());

    let unreachable = OpenTdbClient::with_base_url("http://127.0.0.1:1");
    assert!(unreachable.fetch_categories().await.is_empty());
}
