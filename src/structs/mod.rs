pub mod category_option;
pub mod category_stats;
pub mod cli;
pub mod config;
pub mod dashboard_state;
pub mod dashboard_statistics;
pub mod difficulty_stats;
pub mod load_ticket;
pub mod trivia;
pub mod watch_report;
