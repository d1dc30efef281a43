use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WatchConfig {
    #[serde(default = "ConfigHelper::default_watch_interval_secs")]
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: ConfigHelper::default_watch_interval_secs(),
        }
    }
}
