use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_format")]
    pub format: String,

    /// Width of the longest category bar; 0 sizes it from the terminal.
    #[serde(default = "ConfigHelper::default_bar_width")]
    pub bar_width: usize,

    #[serde(default = "ConfigHelper::default_show_spinner")]
    pub show_spinner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ConfigHelper::default_format(),
            bar_width: ConfigHelper::default_bar_width(),
            show_spinner: ConfigHelper::default_show_spinner(),
        }
    }
}
