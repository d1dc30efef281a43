use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::enums::difficulty::Difficulty;
use crate::structs::category_option::CategoryOption;
use crate::structs::category_stats::CategoryStats;
use crate::structs::difficulty_stats::DifficultyStats;

/// Snapshot of everything the ready dashboard displays.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatistics {
    pub total_questions: usize,
    pub category_count: usize,
    pub difficulty_levels: usize,
    pub selected_category: Option<String>,
    pub categories: Vec<CategoryStats>,
    pub difficulties: Vec<DifficultyStats>,
    pub category_options: Vec<CategoryOption>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardStatistics {
    pub fn new(
        total_questions: usize,
        selected_category: Option<String>,
        categories: Vec<CategoryStats>,
        difficulties: Vec<DifficultyStats>,
        category_options: Vec<CategoryOption>,
    ) -> Self {
        Self {
            total_questions,
            category_count: categories.len(),
            difficulty_levels: Difficulty::ALL.len(),
            selected_category,
            categories,
            difficulties,
            category_options,
            generated_at: Utc::now(),
        }
    }
}
