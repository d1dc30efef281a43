use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";
pub const CATEGORIES_PATH: &str = "api_category.php";
pub const QUESTIONS_PATH: &str = "api.php";

pub const DEFAULT_QUESTION_AMOUNT: u32 = 50;
pub const MAX_QUESTION_AMOUNT: u32 = 50;
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_BAR_WIDTH: usize = 40;
pub const MIN_AUTO_BAR_WIDTH: usize = 10;

pub const TRANSPORT_ERROR_CODE: i64 = -1;
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: Failed to fetch questions. Please check your connection.";

pub const CONFIG_DIR_NAME: &str = "trivia-dashboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const LOADING_MESSAGE: &str = "Loading OpenTriviaDB data...";
pub const SPINNER_FRAME_MILLIS: u64 = 150;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
