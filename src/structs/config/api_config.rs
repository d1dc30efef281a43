use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_amount")]
    pub default_amount: u32,

    /// Unset keeps the HTTP client's own default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Minimum spacing between question requests; 0 disables pacing.
    #[serde(default = "ConfigHelper::default_min_request_interval_secs")]
    pub min_request_interval_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            default_amount: ConfigHelper::default_amount(),
            request_timeout_secs: None,
            min_request_interval_secs: ConfigHelper::default_min_request_interval_secs(),
        }
    }
}
