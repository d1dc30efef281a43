use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::constants::{timeout_duration, CATEGORIES_PATH, DEFAULT_BASE_URL, QUESTIONS_PATH};
use crate::enums::fetch_error::FetchError;
use crate::enums::response_code::ResponseCode;
use crate::errors::DashboardResult;
use crate::helpers::text_helper::unescape_ampersand;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::trivia::api_error::ApiError;
use crate::structs::trivia::categories_response::CategoriesResponse;
use crate::structs::trivia::questions_response::QuestionsResponse;
use crate::structs::trivia::trivia_category::TriviaCategory;
use crate::structs::trivia::trivia_question::TriviaQuestion;
use crate::traits::trivia_source::TriviaSource;

/// HTTP client for the Open Trivia Database.
///
/// Category names and question categories have `&amp;` normalized here, once,
/// so that filter names always match the questions they select.
#[derive(Clone)]
pub struct OpenTdbClient {
    client: Client,
    base_url: String,
    rate_limiter: Option<Arc<ApiRateLimiter>>,
}

impl OpenTdbClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> DashboardResult<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_secs {
            builder = builder.timeout(timeout_duration(seconds));
        }

        let mut client = Self::with_base_url(config.base_url.trim());
        client.client = builder.build()?;
        client.rate_limiter = ApiRateLimiter::from_secs(config.min_request_interval_secs).map(Arc::new);
        if let Some(rate_limiter) = &client.rate_limiter {
            log::debug!("🚦 Question requests paced to one every {}s", rate_limiter.period().as_secs());
        }
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn categories_url(&self) -> String {
        format!("{}/{}", self.base_url, CATEGORIES_PATH)
    }

    fn questions_url(&self, amount: u32) -> String {
        format!("{}/{}?amount={}", self.base_url, QUESTIONS_PATH, amount)
    }

    /// The HTTP status is not checked: OpenTDB answers rate limiting with a 429
    /// whose JSON body still carries the `response_code`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::debug!("🌐 GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        serde_json::from_slice::<T>(&body).map_err(|e| {
            FetchError::SerializationError(format!("HTTP {} from {}: {}", status, url, e))
        })
    }

    async fn request_categories(&self) -> Result<Vec<TriviaCategory>, FetchError> {
        let payload: CategoriesResponse = self.get_json(&self.categories_url()).await?;

        let categories = payload.trivia_categories.unwrap_or_default();
        Ok(categories.into_iter().map(normalize_category).collect())
    }

    async fn request_questions(&self, amount: u32) -> Result<QuestionsResponse, FetchError> {
        if amount == 0 {
            return Err(FetchError::InvalidRequest("amount must be positive".to_string()));
        }

        if let Some(rate_limiter) = &self.rate_limiter {
            rate_limiter.acquire().await;
        }

        self.get_json(&self.questions_url(amount)).await
    }
}

impl Default for OpenTdbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TriviaSource for OpenTdbClient {
    async fn fetch_categories(&self) -> Vec<TriviaCategory> {
        match self.request_categories().await {
            Ok(categories) => {
                log::debug!("📚 Received {} categories", categories.len());
                categories
            }
            Err(e) => {
                log::error!("❌ Error fetching categories: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_questions(&self, amount: u32) -> Result<Vec<TriviaQuestion>, ApiError> {
        let payload = match self.request_questions(amount).await {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("❌ Error fetching questions: {}", e);
                return Err(ApiError::network());
            }
        };

        let code = ResponseCode::from_code(payload.response_code);
        if !code.is_success() {
            log::warn!("⚠️ OpenTDB answered with response code {}: {}", code.code(), code.message());
            return Err(ApiError::from_response_code(payload.response_code));
        }

        let questions: Vec<TriviaQuestion> = payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(normalize_question)
            .collect();

        log::debug!("❓ Received {} questions", questions.len());
        Ok(questions)
    }
}

pub fn normalize_category(category: TriviaCategory) -> TriviaCategory {
    TriviaCategory {
        name: unescape_ampersand(&category.name),
        ..category
    }
}

pub fn normalize_question(question: TriviaQuestion) -> TriviaQuestion {
    TriviaQuestion {
        category: unescape_ampersand(&question.category),
        ..question
    }
}
