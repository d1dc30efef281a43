use crate::enums::dashboard_view::DashboardView;
use crate::errors::{DashboardError, DashboardResult};
use crate::services::aggregator::{category_counts, difficulty_counts, filter_by_category};
use crate::structs::category_option::CategoryOption;
use crate::structs::category_stats::CategoryStats;
use crate::structs::dashboard_statistics::DashboardStatistics;
use crate::structs::difficulty_stats::DifficultyStats;
use crate::structs::load_ticket::LoadTicket;
use crate::structs::trivia::api_error::ApiError;
use crate::structs::trivia::trivia_category::TriviaCategory;
use crate::structs::trivia::trivia_data_result::TriviaDataResult;
use crate::structs::trivia::trivia_question::TriviaQuestion;

/// State behind the dashboard: the last applied load plus the active filter.
#[derive(Debug, Default)]
pub struct DashboardState {
    questions: Vec<TriviaQuestion>,
    categories: Vec<TriviaCategory>,
    selected_category: Option<String>,
    error: Option<ApiError>,
    is_loading: bool,
    latest_sequence: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_sequence += 1;
        self.is_loading = true;
        self.error = None;
        LoadTicket(self.latest_sequence)
    }

    /// Applies a finished load. Returns `false` when a newer load has been
    /// started since `ticket` was issued; the result is then dropped.
    pub fn apply_load(&mut self, ticket: LoadTicket, result: TriviaDataResult) -> bool {
        if ticket.sequence() != self.latest_sequence {
            log::debug!(
                "🗑️ Discarding stale load #{} (latest is #{})",
                ticket.sequence(),
                self.latest_sequence
            );
            return false;
        }

        self.is_loading = false;

        match result.error {
            Some(error) => {
                self.error = Some(error);
                self.questions.clear();
            }
            None => {
                self.categories = result.categories;
                self.questions = result.questions;
            }
        }

        if let Some(selected) = &self.selected_category {
            if !self.has_questions_in(selected) {
                log::info!("🔎 Clearing filter '{}': no questions in the new data", selected);
                self.selected_category = None;
            }
        }

        true
    }

    pub fn select_category(&mut self, category: Option<String>) -> DashboardResult<()> {
        if let Some(name) = &category {
            if !self.has_questions_in(name) {
                return Err(DashboardError::validation_error(
                    "category",
                    name,
                    "must match a category with loaded questions",
                    Some("Run the categories command to list available names"),
                ));
            }
        }

        self.selected_category = category;
        Ok(())
    }

    pub fn has_questions_in(&self, category: &str) -> bool {
        self.questions.iter().any(|q| q.category == category)
    }

    pub fn filtered_questions(&self) -> Vec<&TriviaQuestion> {
        filter_by_category(&self.questions, self.selected_category.as_deref())
    }

    pub fn category_stats(&self) -> Vec<CategoryStats> {
        category_counts(self.filtered_questions())
    }

    pub fn difficulty_stats(&self) -> Vec<DifficultyStats> {
        difficulty_counts(self.filtered_questions())
    }

    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.categories
            .iter()
            .map(|category| CategoryOption {
                category: category.clone(),
                has_questions: self.has_questions_in(&category.name),
                selected: self.selected_category.as_deref() == Some(category.name.as_str()),
            })
            .collect()
    }

    pub fn view(&self) -> DashboardView {
        if self.is_loading {
            return DashboardView::Loading;
        }

        if let Some(error) = &self.error {
            return DashboardView::Error(error.clone());
        }

        if self.questions.is_empty() {
            return DashboardView::Empty;
        }

        DashboardView::Ready(DashboardStatistics::new(
            self.filtered_questions().len(),
            self.selected_category.clone(),
            self.category_stats(),
            self.difficulty_stats(),
            self.category_options(),
        ))
    }

    pub fn questions(&self) -> &[TriviaQuestion] {
        &self.questions
    }

    pub fn categories(&self) -> &[TriviaCategory] {
        &self.categories
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
