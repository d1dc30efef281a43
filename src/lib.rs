//! Terminal dashboard over the Open Trivia Database: fetches categories and
//! questions, aggregates them by category and difficulty, and renders the result.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
