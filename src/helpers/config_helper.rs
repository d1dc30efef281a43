use crate::config::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_BASE_URL, DEFAULT_QUESTION_AMOUNT, DEFAULT_WATCH_INTERVAL_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_amount() -> u32 {
        DEFAULT_QUESTION_AMOUNT
    }

    pub fn default_min_request_interval_secs() -> u64 {
        0
    }

    pub fn default_format() -> String {
        "text".to_string()
    }

    pub fn default_bar_width() -> usize {
        DEFAULT_BAR_WIDTH
    }

    pub fn default_show_spinner() -> bool {
        true
    }

    pub fn default_watch_interval_secs() -> u64 {
        DEFAULT_WATCH_INTERVAL_SECS
    }
}
