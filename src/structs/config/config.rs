use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::watch_config::WatchConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}
