pub mod commands;
pub mod dashboard_view;
pub mod difficulty;
pub mod fetch_error;
pub mod output_format;
pub mod response_code;
