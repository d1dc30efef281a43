use serde::Serialize;
use crate::structs::dashboard_statistics::DashboardStatistics;
use crate::structs::trivia::api_error::ApiError;

/// What the presentation layer should show for the current state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum DashboardView {
    Loading,
    Error(ApiError),
    Empty,
    Ready(DashboardStatistics),
}

impl DashboardView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
