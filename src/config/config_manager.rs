use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_QUESTION_AMOUNT};
use crate::enums::output_format::OutputFormat;
use crate::errors::{DashboardError, DashboardResult};
use crate::structs::config::config::Config;

pub const SAMPLE_CONFIG: &str = r#"# Trivia Dashboard Configuration

[api]
# Root of the OpenTriviaDB API
base_url = "https://opentdb.com"

# Questions requested per load (1-50)
default_amount = 50

# HTTP timeout in seconds; leave unset to use the client default
# request_timeout_secs = 10

# OpenTDB allows one request every 5 seconds per IP.
# Set to 5 to pace question requests, 0 to disable.
min_request_interval_secs = 0

[output]
# "text" or "json"
format = "text"

# Width of the longest category bar (0 = fit the terminal)
bar_width = 40

# Show a spinner while loading
show_spinner = true

[watch]
# Seconds between reloads in watch mode
interval_secs = 30
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Missing files fall back to defaults; unreadable or malformed files are errors.
    pub fn load_from(path: &Path) -> DashboardResult<Config> {
        if !path.exists() {
            log::debug!("📋 No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| DashboardError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config_at(path: &Path) -> DashboardResult<()> {
        if path.exists() {
            return Err(DashboardError::config_error(
                &format!("Configuration file already exists at {}", path.display()),
                Some("Edit the existing file or remove it before running init"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> DashboardResult<()> {
        let mut errors = Vec::new();

        let amount = config.api.default_amount;
        if amount == 0 || amount > MAX_QUESTION_AMOUNT {
            errors.push(DashboardError::validation_error(
                "api.default_amount",
                &amount.to_string(),
                &format!("must be between 1 and {}", MAX_QUESTION_AMOUNT),
                None,
            ));
        }

        let base_url = config.api.base_url.trim();
        if base_url.is_empty() {
            errors.push(DashboardError::validation_error(
                "api.base_url",
                base_url,
                "must not be empty",
                Some("Use https://opentdb.com"),
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(DashboardError::validation_error(
                "api.base_url",
                base_url,
                "must start with http:// or https://",
                None,
            ));
        }

        if config.api.request_timeout_secs == Some(0) {
            errors.push(DashboardError::validation_error(
                "api.request_timeout_secs",
                "0",
                "must be positive when set",
                Some("Remove the key to use the client default"),
            ));
        }

        if let Err(reason) = OutputFormat::from_str(&config.output.format) {
            errors.push(DashboardError::validation_error(
                "output.format",
                &config.output.format,
                &reason,
                Some("Use \"text\" or \"json\""),
            ));
        }

        if config.watch.interval_secs == 0 {
            errors.push(DashboardError::validation_error(
                "watch.interval_secs",
                "0",
                "must be positive",
                None,
            ));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(DashboardError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            }),
        }
    }
}
